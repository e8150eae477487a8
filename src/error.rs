//! Error types for bit and word ring operations.

use thiserror::Error;

/// Error variants for ring construction and symbol extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Construction parameters violate a ring invariant.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Fewer bits than one word have been inserted since the last reset.
    #[error("insufficient bits: have {have}, need {need}")]
    InsufficientBits {
        /// Bits inserted since construction or the last reset.
        have: usize,
        /// Bits required for one word.
        need: usize,
    },

    /// A bit sequence is too long to decode exactly into a symbol.
    #[error("numeric overflow: {length} bits exceeds the {max}-bit limit")]
    NumericOverflow {
        /// Requested length in bits.
        length: usize,
        /// Largest supported length in bits.
        max: usize,
    },

    /// A histogram of `2^word_length` bins cannot be allocated.
    #[error("histogram too large: 2^{word_length} bins")]
    HistogramTooLarge {
        /// Bits per symbol of the ring.
        word_length: usize,
    },
}

/// A specialized Result type for ring operations.
pub type Result<T> = std::result::Result<T, Error>;
