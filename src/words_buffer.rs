//! A bit ring and a word ring driven as one unit.

use crate::bit_ring::BitRing;
use crate::config::WordsConfig;
use crate::error::Result;
use crate::histogram::Histogram;
use crate::word_ring::WordRing;

/// Streams bits in and symbols out, sharing one configuration.
///
/// ```
/// use bitwords::{WordsBuffer, WordsConfig};
///
/// let mut buf = WordsBuffer::new(WordsConfig::new(3, 4)).unwrap();
/// buf.insert_bits([true, false, true]);
/// assert_eq!(buf.store_word().unwrap(), 5);
/// assert!(buf.matches_last(&[true, false, true]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordsBuffer {
    bits: BitRing,
    words: WordRing,
}

impl WordsBuffer {
    /// Build both rings from `config`.
    pub fn new(config: WordsConfig) -> Result<Self> {
        let words = WordRing::from_config(config)?;
        let bits = BitRing::new(config.word_length)?;
        Ok(Self { bits, words })
    }

    /// Push one bit into the bit ring.
    #[inline]
    pub fn insert_bit(&mut self, bit: bool) {
        self.bits.insert_bit(bit);
    }

    /// Push bits in arrival order.
    pub fn insert_bits<I: IntoIterator<Item = bool>>(&mut self, bits: I) {
        for bit in bits {
            self.bits.insert_bit(bit);
        }
    }

    /// Discard the partial word without losing the window position.
    pub fn reset_bits(&mut self) {
        self.bits.reset();
    }

    /// Decode the current window without storing or sliding it.
    pub fn peek_word(&self) -> Result<u64> {
        self.bits.decode_window()
    }

    /// Decode, slide and store the current window.
    pub fn store_word(&mut self) -> Result<u64> {
        self.words.try_extract_and_store(&mut self.bits)
    }

    /// Return true if `candidate` decodes to the last stored symbol.
    pub fn matches_last(&self, candidate: &[bool]) -> bool {
        self.words.matches_last(candidate)
    }

    /// Bits of the current decode window.
    pub fn current_window_bits(&self) -> Vec<bool> {
        self.words.current_window_bits(&self.bits)
    }

    /// Symbol counts over the retained history.
    pub fn histogram(&self) -> Histogram {
        self.words.histogram()
    }

    /// The bit ring.
    pub fn bits(&self) -> &BitRing {
        &self.bits
    }

    /// The word ring.
    pub fn words(&self) -> &WordRing {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_buffer_rejects_bad_config() {
        assert!(matches!(
            WordsBuffer::new(WordsConfig::new(3, 4).with_overlap(3)),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_peek_does_not_store() {
        let mut buf = WordsBuffer::new(WordsConfig::new(2, 4)).unwrap();
        buf.insert_bits([true, true]);
        assert_eq!(buf.peek_word().unwrap(), 3);
        assert_eq!(buf.peek_word().unwrap(), 3);
        assert!(buf.words().is_empty());
        assert_eq!(buf.bits().window_start(), 0);
    }

    #[test]
    fn test_reset_then_refill() {
        let mut buf = WordsBuffer::new(WordsConfig::new(3, 4).with_overlap(0)).unwrap();
        buf.insert_bits([false, true, true]);
        assert_eq!(buf.store_word().unwrap(), 3);

        buf.reset_bits();
        assert!(matches!(
            buf.store_word(),
            Err(Error::InsufficientBits { have: 0, need: 3 })
        ));
        buf.insert_bits([true, false, false]);
        assert_eq!(buf.current_window_bits(), vec![true, false, false]);
        assert_eq!(buf.store_word().unwrap(), 4);
        assert_eq!(buf.histogram().get(3), 1);
        assert_eq!(buf.histogram().get(4), 1);
    }
}
