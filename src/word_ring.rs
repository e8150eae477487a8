//! Fixed-capacity circular history of decoded symbols.
//!
//! A [`WordRing`] pulls words out of a [`BitRing`], advances the bit window
//! according to its [`Overlap`] policy, and keeps the most recent
//! `max_words` symbols. Once full, each new symbol silently replaces the
//! oldest one.
//!
//! # Invariants
//! - `write_cursor < capacity`, `oldest < capacity`, `len <= capacity`.
//! - While not full, `oldest == 0` and live symbols occupy `0..len`.
//! - Once full, `oldest == write_cursor`.
//! - `last_written` indexes the symbol from the most recent append.

use tracing::{debug, trace, warn};

use crate::bit_ring::BitRing;
use crate::config::{Overlap, WordsConfig};
use crate::decode::decode_bits;
use crate::error::{Error, Result};
use crate::histogram::Histogram;

/// Word lengths above this make histogram allocation worth a warning.
const LARGE_HISTOGRAM_BITS: usize = 24;

/// A circular buffer of decoded symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRing {
    words: Box<[u64]>,
    write_cursor: usize,
    oldest: usize,
    len: usize,
    last_written: usize,
    word_length: usize,
    overlap: Overlap,
}

impl WordRing {
    /// Create a ring of `max_words` symbols of `word_length` bits, overlap disabled.
    pub fn new(word_length: usize, max_words: usize) -> Result<Self> {
        Self::from_config(WordsConfig::new(word_length, max_words))
    }

    /// Create a ring whose windows share `overlap` bits with their predecessor.
    ///
    /// Fails with `InvalidConfiguration` unless `overlap < word_length`.
    pub fn with_overlap(word_length: usize, max_words: usize, overlap: usize) -> Result<Self> {
        Self::from_config(WordsConfig::new(word_length, max_words).with_overlap(overlap))
    }

    /// Create a ring from validated parameters.
    pub fn from_config(config: WordsConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            word_length = config.word_length,
            max_words = config.max_words,
            overlap = %config.overlap,
            "word ring created"
        );

        Ok(Self {
            words: vec![0u64; config.max_words].into_boxed_slice(),
            write_cursor: 0,
            oldest: 0,
            len: 0,
            last_written: 0,
            word_length: config.word_length,
            overlap: config.overlap,
        })
    }

    /// Maximum number of retained symbols.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.len()
    }

    /// Number of symbols currently retained.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return true if no symbol has been stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return true once the next append will evict.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Bits per symbol.
    #[inline]
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// The window advance policy.
    #[inline]
    pub fn overlap(&self) -> Overlap {
        self.overlap
    }

    /// Index of the next slot to write.
    #[inline]
    pub fn write_cursor(&self) -> usize {
        self.write_cursor
    }

    /// Index of the oldest retained symbol.
    #[inline]
    pub fn oldest_index(&self) -> usize {
        self.oldest
    }

    /// The most recently stored symbol.
    pub fn last(&self) -> Option<u64> {
        if self.is_empty() {
            None
        } else {
            Some(self.words[self.last_written])
        }
    }

    /// Retained symbols, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        let cap = self.capacity();
        (0..self.len).map(move |i| self.words[(self.oldest + i) % cap])
    }

    /// Store `value`, evicting the oldest symbol if the ring is full.
    ///
    /// Only the low `word_length` bits of `value` are kept.
    pub fn append_symbol(&mut self, value: u64) {
        let was_full = self.is_full();

        self.words[self.write_cursor] = value & self.symbol_mask();
        self.last_written = self.write_cursor;
        if was_full {
            self.oldest = self.next(self.oldest);
        } else {
            self.len += 1;
        }
        self.write_cursor = self.next(self.write_cursor);
    }

    /// Decode the current window of `bits`, slide it, and store the symbol.
    ///
    /// Fails with `InsufficientBits` before a full word has arrived since the
    /// last reset, and with `InvalidConfiguration` if `bits` was built for a
    /// different word length. Neither ring changes on failure.
    pub fn try_extract_and_store(&mut self, bits: &mut BitRing) -> Result<u64> {
        if bits.capacity() != self.word_length {
            return Err(Error::InvalidConfiguration(format!(
                "bit ring holds {} bits, word length is {}",
                bits.capacity(),
                self.word_length
            )));
        }
        let value = bits.decode_window()?;

        let step = self.overlap.step(self.word_length);
        let window_start = bits.window_start();
        bits.advance_window_start(step);
        self.append_symbol(value);

        trace!(value, window_start, step, retained = self.len, "symbol stored");
        Ok(value)
    }

    /// Return true if `candidate` decodes to the most recently stored symbol.
    ///
    /// Always false before the first store, or if `candidate` is not exactly
    /// `word_length` bits long.
    pub fn matches_last(&self, candidate: &[bool]) -> bool {
        if candidate.len() != self.word_length {
            return false;
        }
        match (self.last(), decode_bits(candidate)) {
            (Some(last), Ok(value)) => last == value,
            _ => false,
        }
    }

    /// The `word_length` bits of the current window of `bits`, read circularly.
    pub fn current_window_bits(&self, bits: &BitRing) -> Vec<bool> {
        let cap = bits.capacity();
        let start = bits.window_start();
        (0..self.word_length)
            .filter_map(|offset| bits.get((start + offset) % cap))
            .collect()
    }

    /// Count every retained symbol into `2^word_length` bins.
    ///
    /// Allocation is exponential in the word length; callers keep it small.
    ///
    /// # Panics
    ///
    /// Panics if `2^word_length` bins cannot be allocated. Use
    /// [`WordRing::try_histogram`] to get an error instead.
    pub fn histogram(&self) -> Histogram {
        self.warn_if_large();
        let bins = self.bins().unwrap_or(usize::MAX);
        Histogram::from_symbols(bins, self.words[..self.len].iter().copied())
    }

    /// Like [`WordRing::histogram`], but fails with `HistogramTooLarge` when
    /// the bins do not fit in memory.
    pub fn try_histogram(&self) -> Result<Histogram> {
        self.warn_if_large();
        let too_large = || Error::HistogramTooLarge {
            word_length: self.word_length,
        };
        let bins = self.bins().ok_or_else(too_large)?;
        let mut counts = Vec::new();
        counts.try_reserve_exact(bins).map_err(|_| too_large())?;
        counts.resize(bins, 0);
        Ok(Histogram::tally(counts, self.words[..self.len].iter().copied()))
    }

    fn bins(&self) -> Option<usize> {
        1usize.checked_shl(self.word_length as u32)
    }

    fn warn_if_large(&self) {
        if self.word_length > LARGE_HISTOGRAM_BITS {
            warn!(
                word_length = self.word_length,
                "building a histogram with 2^word_length bins"
            );
        }
    }

    #[inline]
    fn symbol_mask(&self) -> u64 {
        (1u64 << self.word_length) - 1
    }

    #[inline]
    fn next(&self, index: usize) -> usize {
        if index + 1 == self.capacity() {
            0
        } else {
            index + 1
        }
    }
}
