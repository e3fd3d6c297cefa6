//! Huffman tree construction.
//!
//! Repeatedly merges the two lowest-frequency subtrees until one tree
//! remains. Selection is deterministic: subtrees are ordered by
//! `(frequency, creation order)`, with leaves created in ascending symbol
//! order before any merge and each merged node numbered after everything
//! created so far. Equal frequencies therefore keep their pre-merge relative
//! order and a fresh merge sorts behind existing subtrees of the same
//! frequency, so identical frequency tables always yield identical trees.

use std::collections::BinaryHeap;

use crate::freq::FreqTable;

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A leaf owning one symbol and its occurrence count.
    Leaf {
        /// The symbol this leaf encodes.
        symbol: u8,
        /// Occurrences of the symbol in the input.
        freq: u64,
    },
    /// An internal node owning exactly two children.
    Internal {
        /// Sum of the children's frequencies.
        freq: u64,
        /// Subtree reached by a 0 bit.
        left: Box<Node>,
        /// Subtree reached by a 1 bit.
        right: Box<Node>,
    },
}

impl Node {
    /// Aggregate frequency of this subtree.
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }
}

/// A subtree waiting in the merge queue, tagged with its creation number.
struct Queued {
    freq: u64,
    seq: u32,
    node: Node,
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        (self.freq, self.seq) == (other.freq, other.seq)
    }
}

impl Eq for Queued {}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (other.freq, other.seq).cmp(&(self.freq, self.seq)) // Min-priority queue
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the Huffman tree for a frequency table.
///
/// Returns `None` when the table is empty. A table with exactly one distinct
/// symbol yields a single-leaf tree; code assignment handles that case.
pub fn build(table: &FreqTable) -> Option<Node> {
    let mut queue = BinaryHeap::new();
    let mut seq = 0u32;

    for (symbol, freq) in table.iter() {
        queue.push(Queued {
            freq,
            seq,
            node: Node::Leaf { symbol, freq },
        });
        seq += 1;
    }

    while queue.len() > 1 {
        let first = queue.pop().unwrap();
        let second = queue.pop().unwrap();
        let freq = first.freq + second.freq;
        queue.push(Queued {
            freq,
            seq,
            node: Node::Internal {
                freq,
                left: Box::new(first.node),
                right: Box::new(second.node),
            },
        });
        seq += 1;
    }

    queue.pop().map(|entry| entry.node)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaves(node: &Node, out: &mut Vec<(u8, u64)>) {
        match node {
            Node::Leaf { symbol, freq } => out.push((*symbol, *freq)),
            Node::Internal { left, right, .. } => {
                leaves(left, out);
                leaves(right, out);
            }
        }
    }

    #[test]
    fn empty_table_has_no_tree() {
        assert!(build(&FreqTable::from_bytes(&[])).is_none());
    }

    #[test]
    fn single_symbol_is_a_lone_leaf() {
        let root = build(&FreqTable::from_bytes(b"xxxx")).unwrap();
        assert_eq!(
            root,
            Node::Leaf {
                symbol: b'x',
                freq: 4
            }
        );
    }

    #[test]
    fn aab_merges_rare_symbol_left() {
        // {a: 2, b: 1}; b has the lowest frequency so it is popped first
        // and becomes the left child.
        let root = build(&FreqTable::from_bytes(b"aab")).unwrap();
        match root {
            Node::Internal { freq, left, right } => {
                assert_eq!(freq, 3);
                assert_eq!(
                    *left,
                    Node::Leaf {
                        symbol: b'b',
                        freq: 1
                    }
                );
                assert_eq!(
                    *right,
                    Node::Leaf {
                        symbol: b'a',
                        freq: 2
                    }
                );
            }
            other => panic!("expected internal root, got {other:?}"),
        }
    }

    #[test]
    fn all_ties_resolve_in_symbol_order() {
        // a, b, c all at frequency 1: a and b merge first (lowest creation
        // numbers), then the merge (freq 2, newest) loses to c (freq 1).
        let root = build(&FreqTable::from_bytes(b"abc")).unwrap();
        match root {
            Node::Internal { left, right, .. } => {
                assert_eq!(
                    *left,
                    Node::Leaf {
                        symbol: b'c',
                        freq: 1
                    }
                );
                match *right {
                    Node::Internal { left, right, .. } => {
                        assert_eq!(
                            *left,
                            Node::Leaf {
                                symbol: b'a',
                                freq: 1
                            }
                        );
                        assert_eq!(
                            *right,
                            Node::Leaf {
                                symbol: b'b',
                                freq: 1
                            }
                        );
                    }
                    other => panic!("expected internal right child, got {other:?}"),
                }
            }
            other => panic!("expected internal root, got {other:?}"),
        }
    }

    #[test]
    fn tree_preserves_all_symbols_and_counts() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let table = FreqTable::from_bytes(data);
        let root = build(&table).unwrap();

        assert_eq!(root.freq(), data.len() as u64);

        let mut found = Vec::new();
        leaves(&root, &mut found);
        assert_eq!(found.len(), table.distinct());
        for (symbol, freq) in found {
            assert_eq!(freq, table.count(symbol));
        }
    }

    #[test]
    fn identical_tables_build_identical_trees() {
        let data = b"mississippi river delta";
        let a = build(&FreqTable::from_bytes(data)).unwrap();
        let b = build(&FreqTable::from_bytes(data)).unwrap();
        assert_eq!(a, b);
    }
}
