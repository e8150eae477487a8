//! Construction parameters for word rings.

use std::fmt;

use crate::decode::check_length;
use crate::error::{Error, Result};

/// How far the decode window moves after each stored symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Overlap {
    /// Slide one bit per symbol.
    #[default]
    Disabled,
    /// Reuse this many trailing bits of each window in the next one.
    Bits(usize),
}

impl Overlap {
    /// Window displacement after a store, for words of `word_length` bits.
    ///
    /// An overlap of `word_length` bits or more yields a step of zero; such
    /// policies are rejected by [`WordsConfig::validate`].
    #[inline]
    pub fn step(self, word_length: usize) -> usize {
        match self {
            Overlap::Disabled => 1,
            Overlap::Bits(k) => word_length.saturating_sub(k),
        }
    }
}

impl fmt::Display for Overlap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Overlap::Disabled => f.write_str("disabled"),
            Overlap::Bits(k) => write!(f, "{k} bits"),
        }
    }
}

/// Validated parameters shared by [`crate::WordRing`] and [`crate::WordsBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordsConfig {
    /// Bits per symbol.
    pub word_length: usize,
    /// Symbols retained before the oldest is evicted.
    pub max_words: usize,
    /// Window advance policy.
    #[cfg_attr(feature = "serde", serde(default))]
    pub overlap: Overlap,
}

impl WordsConfig {
    /// Parameters with overlap disabled.
    pub fn new(word_length: usize, max_words: usize) -> Self {
        Self {
            word_length,
            max_words,
            overlap: Overlap::Disabled,
        }
    }

    /// Replace the overlap policy with `bits` reused bits per window.
    pub fn with_overlap(mut self, bits: usize) -> Self {
        self.overlap = Overlap::Bits(bits);
        self
    }

    /// Check every construction rule.
    pub fn validate(&self) -> Result<()> {
        if self.word_length == 0 {
            return Err(Error::InvalidConfiguration(
                "word length must be greater than zero".to_string(),
            ));
        }
        check_length(self.word_length)?;
        if self.max_words == 0 {
            return Err(Error::InvalidConfiguration(
                "max words must be greater than zero".to_string(),
            ));
        }
        if let Overlap::Bits(k) = self.overlap {
            if k >= self.word_length {
                return Err(Error::InvalidConfiguration(format!(
                    "overlap {k} must be less than word length {}",
                    self.word_length
                )));
            }
        }
        Ok(())
    }

    /// Window displacement after each stored symbol.
    #[inline]
    pub fn step(&self) -> usize {
        self.overlap.step(self.word_length)
    }
}
