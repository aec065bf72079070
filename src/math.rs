//! Integer helpers for alignment and rounding.

/// Ceiling division that cannot overflow, unlike `(x + y - 1) / y`.
#[inline]
pub const fn div_round_up(x: usize, y: usize) -> usize {
    x / y + (x % y != 0) as usize
}

/// Alignment and rounding helpers for unsigned integers.
pub trait IntExt: Copy {
    /// `self - other` if `self` is bigger, otherwise 0.
    fn less_by(self, other: Self) -> Self;

    /// Integer division rounding up.
    fn div_round_up(self, divisor: Self) -> Self;

    /// Round up to a multiple of `to`, which must be a power of 2.
    ///
    /// Wraps around within the type, so aligning a value close to the
    /// maximum yields 0.
    fn align_to(self, to: Self) -> Self;

    /// Same as `align_to(8)`.
    fn align8(self) -> Self;

    /// Round up to the next power of 2. `0` yields `0`, and so does overflow.
    fn align_power2(self) -> Self;

    /// Binary logarithm, rounded down. `log2(0)` is defined as 0.
    fn log2(self) -> u32;
}

macro_rules! impl_int_ext {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntExt for $ty {
                #[inline]
                fn less_by(self, other: Self) -> Self {
                    self.saturating_sub(other)
                }

                #[inline]
                fn div_round_up(self, divisor: Self) -> Self {
                    self / divisor + (self % divisor != 0) as $ty
                }

                #[inline]
                fn align_to(self, to: Self) -> Self {
                    debug_assert!(to.is_power_of_two(), "alignment must be a power of 2");
                    self.wrapping_add(to - 1) & !(to - 1)
                }

                #[inline]
                fn align8(self) -> Self {
                    self.align_to(8)
                }

                #[inline]
                fn align_power2(self) -> Self {
                    if self == 0 {
                        0
                    } else {
                        self.checked_next_power_of_two().unwrap_or(0)
                    }
                }

                #[inline]
                fn log2(self) -> u32 {
                    self.checked_ilog2().unwrap_or(0)
                }
            }
        )*
    };
}

impl_int_ext!(u8, u16, u32, u64, usize);
