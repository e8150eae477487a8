//! # Binary Words
//!
//! *Symbolic encoding of binary time series with bounded memory.*
//!
//! ## Intuition First
//!
//! Picture a ticker tape of 0s and 1s (a thresholded signal, a spike train)
//! running under a magnifying glass that shows exactly $n$ digits at a time.
//! Every so often you read the digits under the glass as one binary number,
//! write that number in a notebook, and nudge the glass along. The notebook
//! has a fixed number of lines; when it fills, you start erasing from the top.
//!
//! The glass is a [`BitRing`], the notebook is a [`WordRing`], and a
//! [`Histogram`] tells you how often each number appears in the notebook.
//!
//! ## The Problem
//!
//! Streaming symbolization wants three things at once:
//! - **Constant memory**: storage fixed at construction, no allocation per bit.
//! - **Exact symbols**: no floating-point weights, no silent overflow.
//! - **Flexible windows**: sliding one bit at a time, or jumping with overlap.
//!
//! ## Mathematical Formulation
//!
//! A window of $n$ bits $b_0 \dots b_{n-1}$ (read circularly from the window
//! start) becomes the symbol
//!
//! $$ w = \sum_{i=0}^{n-1} b_i \, 2^{\,n-1-i} \in [0, 2^n). $$
//!
//! After each stored symbol the window start moves by
//! - $1$ bit with overlap disabled, or
//! - $n - k$ bits with an overlap of $k$ bits ($0 \le k < n$).
//!
//! ## Complexity Analysis
//!
//! - **Insert bit**: $O(1)$.
//! - **Extract and store**: $O(n + s)$ where $s$ is the window step.
//! - **Histogram**: $O(2^n + m)$ time and $O(2^n)$ space for $m$ retained words.
//!
//! ## What Could Go Wrong
//!
//! 1. **Histogram size**: bins are exponential in $n$. Keep $n$ near 20 or below
//!    before asking for one.
//! 2. **Readiness vs. contents**: the readiness counter measures bits since the
//!    last reset, not bits currently valid in storage. A reset keeps both
//!    cursors, so the next window may start mid-buffer.
//! 3. **No synchronization**: cursor updates are multi-step. Share a ring
//!    across threads only behind an external lock.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **`BitRing`**: one word of bits with write and window cursors.
//! - **`WordRing`**: bounded symbol history with the window-advance policy.
//! - **`Histogram`**: dense per-symbol counts over the history.
//! - **`WordsBuffer`**: both rings behind one configuration.
//!
//! ## References
//!
//! - Shannon, C. E. (1948). "A Mathematical Theory of Communication."
//! - Strong, S. P., et al. (1998). "Entropy and Information in Neural Spike Trains."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bit_ring;
pub mod config;
pub mod decode;
pub mod error;
pub mod histogram;
pub mod word_ring;
pub mod words_buffer;

pub use bit_ring::BitRing;
pub use config::{Overlap, WordsConfig};
pub use decode::{decode_bits, encode_bits, MAX_WORD_LENGTH};
pub use error::{Error, Result};
pub use histogram::Histogram;
pub use word_ring::WordRing;
pub use words_buffer::WordsBuffer;
