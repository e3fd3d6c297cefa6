//! Prefix-free code assignment.
//!
//! A code is the root-to-leaf path of its symbol: 0 for left, 1 for right.
//! Codes are prefix-free by construction, since symbols only live at leaves.
//! With at most 256 leaves the tree depth never exceeds 255, so every code
//! is 1 to 255 bits long.

use crate::tree::Node;

/// Variable-length bit codes for every symbol present in a tree.
///
/// Each code stores one bit per element, values 0 or 1, in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBook {
    codes: Vec<Vec<u8>>, // indexed by symbol, empty vec = symbol absent
}

impl CodeBook {
    /// Walk the tree and bind each leaf symbol to its accumulated path.
    ///
    /// A root that is itself a leaf (single distinct symbol in the input)
    /// gets the one-bit code `0`: a zero-length code could neither be
    /// packed nor recognized while decoding.
    pub fn from_tree(root: &Node) -> Self {
        let mut codes = vec![Vec::new(); 256];
        assign(root, Vec::new(), &mut codes);
        Self { codes }
    }

    /// The code for a symbol, if the symbol has one.
    pub fn get(&self, symbol: u8) -> Option<&[u8]> {
        let code = &self.codes[symbol as usize];
        if code.is_empty() {
            None
        } else {
            Some(code.as_slice())
        }
    }

    /// Number of symbols that have a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|code| !code.is_empty()).count()
    }

    /// True if no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|code| code.is_empty())
    }

    /// Coded symbols with their codes, ascending by symbol value.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[u8])> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter(|(_, code)| !code.is_empty())
            .map(|(symbol, code)| (symbol as u8, code.as_slice()))
    }
}

fn assign(node: &Node, prefix: Vec<u8>, codes: &mut [Vec<u8>]) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes[*symbol as usize] = if prefix.is_empty() { vec![0] } else { prefix };
        }
        Node::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push(0);
            assign(left, left_prefix, codes);

            let mut right_prefix = prefix;
            right_prefix.push(1);
            assign(right, right_prefix, codes);
        }
    }
}
