//! # Huffman Coding
//!
//! *Optimal prefix codes from symbol frequencies, packed into a self-describing container.*
//!
//! ## Intuition First
//!
//! Morse code already knew the trick: give the common letters the short marks.
//! `E` is a single dot because English leans on it constantly; `Q` can afford
//! four marks because it hardly ever shows up.
//!
//! Huffman coding turns that instinct into an algorithm. Count how often each
//! byte occurs, then repeatedly merge the two *lightest* piles into one until
//! a single tree remains. Every merge pushes rare symbols one level deeper,
//! so the frequent symbols end up near the root with short codes and the rare
//! ones sink to the bottom with long ones. Reading the path to each leaf
//! (left = 0, right = 1) yields a code no other code is a prefix of, which is
//! exactly what lets the decoder find symbol boundaries in a raw bit stream.
//!
//! ## The Problem
//!
//! Fixed-width encodings spend 8 bits on every byte no matter how lopsided
//! the input is. A file that is 90% one symbol carries almost no information
//! per byte, yet `u8` storage charges full price for each one.
//!
//! ## Historical Context
//!
//! ```text
//! 1838  Morse        Shorter marks for the common letters
//! 1948  Shannon      Entropy as the fundamental limit
//! 1949  Fano         Top-down splitting: close, but suboptimal
//! 1952  Huffman      Bottom-up merging: provably optimal prefix codes
//! 1977  Ziv, Lempel  Dictionary methods take the spotlight
//! 1993  gzip         DEFLATE keeps Huffman as the bit-level back end
//! ```
//!
//! David Huffman found the bottom-up construction as a term paper for Fano's
//! information theory class, sidestepping the top-down approach his professor
//! had been stuck on.
//!
//! ## Mathematical Formulation
//!
//! Given symbols $s \in S$ with probabilities $p_s$, a code $C$ assigns each
//! symbol a bit string $c_s$. Huffman's construction minimizes the expected
//! length
//!
//! ```text
//! L(C) = \sum_{s} p_s \cdot |c_s|
//! ```
//!
//! over all prefix-free codes, and the result sits within one bit of the
//! entropy: $H(P) \le L(C) < H(P) + 1$.
//!
//! ## Complexity Analysis
//!
//! - **Encode**: $O(n)$ to count frequencies plus $O(k \log k)$ to build the
//!   tree, with $k \le 256$ distinct symbols.
//! - **Decode**: $O(b)$ over the $b$ packed bits, with a hash lookup per bit.
//!
//! ## Failure Modes
//!
//! 1. **Whole-bit granularity**: every code is at least one bit, so heavily
//!    skewed sources stall at 1 bit per symbol where arithmetic coding or ANS
//!    would go below.
//! 2. **Header overhead**: the serialized code table rides along with the
//!    data, so tiny inputs can produce containers larger than the original.
//! 3. **Two-pass model**: frequencies must be known before any output bit is
//!    written, so the codec reads its whole input up front.
//!
//! ## Implementation Notes
//!
//! The pipeline is split into stages that can be used independently:
//! [`freq`] counts symbols, [`tree`] builds the deterministic Huffman tree,
//! [`code`] walks it into a code book, [`bits`] packs and unpacks MSB-first
//! bit streams, and [`container`] ties them together behind [`compress`] and
//! [`decompress`] with the trailing-footer container format described there.
//! Tree construction breaks frequency ties by ascending symbol value, so the
//! same input always produces the same container.
//!
//! ## References
//!
//! - Huffman, D. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Moffat, A. (2019). "Huffman Coding." ACM Computing Surveys.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bits;
pub mod code;
pub mod container;
pub mod error;
pub mod freq;
pub mod tree;

pub use code::CodeBook;
pub use container::{compress, decompress};
pub use error::{Error, Result};
pub use freq::FreqTable;
pub use tree::Node;
