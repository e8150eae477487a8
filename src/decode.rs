//! MSB-first conversion between bit sequences and integer symbols.
//!
//! A word of $n$ bits $b_0 b_1 \dots b_{n-1}$ decodes to
//! $\sum_i b_i \cdot 2^{n-1-i}$, so the first bit carries the largest weight.
//! Weights are applied with shifts, never floating-point powers.

use crate::error::{Error, Result};

/// Largest word length, in bits, that decodes exactly into a `u64` symbol.
///
/// One bit below the width of `u64`, which also keeps `1 << MAX_WORD_LENGTH`
/// representable.
pub const MAX_WORD_LENGTH: usize = u64::BITS as usize - 1;

/// Fail with `NumericOverflow` if `length` exceeds [`MAX_WORD_LENGTH`].
pub(crate) fn check_length(length: usize) -> Result<()> {
    if length > MAX_WORD_LENGTH {
        return Err(Error::NumericOverflow {
            length,
            max: MAX_WORD_LENGTH,
        });
    }
    Ok(())
}

/// Fold bits into an accumulator, most significant first.
#[inline]
pub(crate) fn fold_bits<I: IntoIterator<Item = bool>>(bits: I) -> u64 {
    bits.into_iter()
        .fold(0u64, |acc, bit| (acc << 1) | u64::from(bit))
}

/// Decode a plain (non-circular) bit sequence into its symbol.
///
/// ```
/// use bitwords::decode::decode_bits;
/// assert_eq!(decode_bits(&[true, false, true]).unwrap(), 5);
/// ```
pub fn decode_bits(bits: &[bool]) -> Result<u64> {
    check_length(bits.len())?;
    Ok(fold_bits(bits.iter().copied()))
}

/// Expand `value` into `length` bits, most significant first.
///
/// Bits of `value` above `length` are ignored.
pub fn encode_bits(value: u64, length: usize) -> Result<Vec<bool>> {
    check_length(length)?;
    Ok((0..length)
        .rev()
        .map(|shift| (value >> shift) & 1 == 1)
        .collect())
}
