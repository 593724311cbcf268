//! The [`Unit`] trait: one fixed-size element of a managed region.

use std::fmt;

/// A single element of a managed region.
///
/// A unit equal to [`Unit::FREE`] is free; any other value is occupied
/// data. Free-ness is decided by equality with the sentinel, never by
/// truthiness, so floating-point units treat both `0.0` and `-0.0` as
/// free and `NaN` as occupied.
pub trait Unit: Copy + PartialEq + fmt::Debug {
    /// The zero sentinel marking a free unit.
    const FREE: Self;

    /// Whether this unit carries the free sentinel.
    #[inline]
    fn is_free(&self) -> bool {
        *self == Self::FREE
    }

    /// Render this unit as a single character.
    ///
    /// The value is truncated to its low byte and read as a Latin-1 code
    /// point, so ASCII payloads such as `b'C' as i32` render as `'C'`.
    /// Floats drop their fraction first.
    fn to_glyph(self) -> char;
}

macro_rules! impl_int_unit {
    ($($t:ty),* $(,)?) => {
        $(
            impl Unit for $t {
                const FREE: Self = 0;

                #[inline]
                fn to_glyph(self) -> char {
                    char::from(self as u8)
                }
            }
        )*
    };
}

impl_int_unit!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_float_unit {
    ($($t:ty),* $(,)?) => {
        $(
            impl Unit for $t {
                const FREE: Self = 0.0;

                #[inline]
                fn to_glyph(self) -> char {
                    // Through i64 so the low byte survives; NaN maps to 0.
                    char::from((self as i64) as u8)
                }
            }
        )*
    };
}

impl_float_unit!(f32, f64);
