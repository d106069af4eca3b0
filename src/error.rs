//! Error types for Huffman coding.

use thiserror::Error;

/// Error variants for Huffman operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The input contains a symbol the supplied code table has no code for.
    #[error("symbol at position {0} has no code in the table")]
    UnknownSymbol(usize),
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
