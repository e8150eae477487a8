//! Fixed-capacity circular buffer of single bits.
//!
//! The ring holds exactly one word's worth of bits. New bits overwrite the
//! oldest cell, and a separate window cursor marks the most significant bit
//! of the next word to decode.
//!
//! # Invariants
//! - `write_cursor < capacity` and `window_start < capacity`.
//! - `inserted` counts bits since construction or the last [`BitRing::reset`].
//!   It only gates readiness; it never bounds or indexes storage.

use tracing::debug;

use crate::decode::{check_length, fold_bits};
use crate::error::{Error, Result};

/// A circular bit buffer sized to one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitRing {
    cells: Box<[bool]>,
    write_cursor: usize,
    window_start: usize,
    inserted: usize,
}

impl BitRing {
    /// Create a ring holding `capacity` bits, all initially unset.
    ///
    /// `capacity` is the word length and must lie in `1..=MAX_WORD_LENGTH`.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidConfiguration(
                "word length must be greater than zero".to_string(),
            ));
        }
        check_length(capacity)?;

        Ok(Self {
            cells: vec![false; capacity].into_boxed_slice(),
            write_cursor: 0,
            window_start: 0,
            inserted: 0,
        })
    }

    /// Number of bit cells, equal to the word length.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Index of the next cell to overwrite.
    #[inline]
    pub fn write_cursor(&self) -> usize {
        self.write_cursor
    }

    /// Index of the most significant bit of the current window.
    #[inline]
    pub fn window_start(&self) -> usize {
        self.window_start
    }

    /// Bits inserted since construction or the last reset.
    #[inline]
    pub fn inserted_count(&self) -> usize {
        self.inserted
    }

    /// Raw cell at `index`, or `None` past the end of storage.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.cells.get(index).copied()
    }

    /// Return true once at least one word's worth of bits has arrived.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.inserted >= self.capacity()
    }

    /// Write `bit` at the write cursor and advance it circularly.
    pub fn insert_bit(&mut self, bit: bool) {
        self.cells[self.write_cursor] = bit;
        self.write_cursor = self.next(self.write_cursor);
        self.inserted = self.inserted.saturating_add(1);
    }

    /// Clear the readiness counter.
    ///
    /// Cursors and cell contents are kept, so a window positioned mid-buffer
    /// survives for the next decode attempt.
    pub fn reset(&mut self) {
        debug!(
            discarded = self.inserted,
            window_start = self.window_start,
            "bit ring readiness reset"
        );
        self.inserted = 0;
    }

    /// Move the window start forward `steps` cells, one cell at a time.
    pub fn advance_window_start(&mut self, steps: usize) {
        for _ in 0..steps {
            self.window_start = self.next(self.window_start);
        }
    }

    /// Decode the current window into a symbol without moving any cursor.
    ///
    /// Reads `capacity` cells from the window start, wrapping circularly; the
    /// first cell read is the most significant bit.
    pub fn decode_window(&self) -> Result<u64> {
        if !self.is_ready() {
            return Err(Error::InsufficientBits {
                have: self.inserted,
                need: self.capacity(),
            });
        }
        Ok(fold_bits(self.window_bits()))
    }

    /// The bits of the current window in decode order, wrapping circularly.
    pub fn window_bits(&self) -> impl Iterator<Item = bool> + '_ {
        let cap = self.capacity();
        (0..cap).map(move |offset| self.cells[(self.window_start + offset) % cap])
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
