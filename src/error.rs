//! Error types for the Huffman codec.

use thiserror::Error;

/// Error variants for compression and decompression.
#[derive(Debug, Error)]
pub enum Error {
    /// The container claims more table or footer bytes than are present.
    #[error("truncated container: need at least {needed} bytes, have {have}")]
    Truncated {
        /// Bytes the container's own size fields require.
        needed: usize,
        /// Bytes actually available.
        have: usize,
    },

    /// A structurally invalid field inside the container.
    #[error("malformed container: {0}")]
    Malformed(String),

    /// The packed bit stream ended in the middle of a code.
    #[error("unresolved fragment of {0} bits at end of stream")]
    UnresolvedFragment(usize),

    /// A codec invariant was violated. This is a defect in the codec,
    /// never a property of the input.
    #[error("internal invariant violated: {0}")]
    Internal(&'static str),

    /// An I/O error occurred while reading or writing a file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
