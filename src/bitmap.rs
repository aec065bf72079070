//! Bit operations on byte-addressed bitmaps.
//!
//! Bit `n` lives in byte `n / 8` under the mask `1 << (n % 8)`. All functions
//! panic if the bit lies outside of the slice.

use crate::math::div_round_up;

#[inline]
const fn mask(bit: usize) -> u8 {
    1 << (bit % 8)
}

/// Returns `true` if `bit` is set.
#[inline]
pub fn test(bitmap: &[u8], bit: usize) -> bool {
    bitmap[bit / 8] & mask(bit) != 0
}

/// Sets `bit`.
#[inline]
pub fn set(bitmap: &mut [u8], bit: usize) {
    bitmap[bit / 8] |= mask(bit);
}

/// Clears `bit`.
#[inline]
pub fn clear(bitmap: &mut [u8], bit: usize) {
    bitmap[bit / 8] &= !mask(bit);
}

/// Sets the first `n_bits` bits.
///
/// Works on whole bytes, so trailing bits of the last byte are set as well.
#[inline]
pub fn set_all(bitmap: &mut [u8], n_bits: usize) {
    bitmap[..div_round_up(n_bits, 8)].fill(0xff);
}

/// Clears the first `n_bits` bits.
///
/// Works on whole bytes, so trailing bits of the last byte are cleared as well.
#[inline]
pub fn clear_all(bitmap: &mut [u8], n_bits: usize) {
    bitmap[..div_round_up(n_bits, 8)].fill(0);
}
