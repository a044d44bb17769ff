//! Integer to decimal string conversion.
//!
//! Digits are produced by the emitters in `strategy`, which fill a fixed-width
//! digit array back to front and report where the first digit landed. The array
//! type is sized for the widest value, so no emitter can run out of room.
//! `ToDecimal` wraps them in the two useful shapes: count the digits first and
//! size the output exactly (`to_chars`, `to_string`), or skip the count and copy
//! out whatever the emitter used (`to_string_unsized`, `Decimal`).

use core::fmt;
use core::str;
use alloc::string::String;

use log::debug;

use crate::digits10::{digit_count_u32, digit_count_u64};
use crate::error::Error;

pub use self::digits::Digit;
pub use self::digits::{Digits64, Digits32, Digits16, Digits8};
pub use self::digits::{NDIGITS64, NDIGITS32, NDIGITS16, NDIGITS8};

mod digits;
#[cfg(test)] mod testing;

pub mod strategy {
    pub mod naive;
    pub mod div100;
    pub mod best;
}

use self::strategy::best;

#[cfg(target_pointer_width = "64")] const USIZE_LEN: usize = 20;
#[cfg(target_pointer_width = "64")] const ISIZE_LEN: usize = 20;
#[cfg(target_pointer_width = "32")] const USIZE_LEN: usize = 10;
#[cfg(target_pointer_width = "32")] const ISIZE_LEN: usize = 11;
#[cfg(target_pointer_width = "16")] const USIZE_LEN: usize = 5;
#[cfg(target_pointer_width = "16")] const ISIZE_LEN: usize = 6;

fn ascii_str(bytes: &[u8]) -> &str {
    debug_assert!(bytes.iter().all(|&c| c == b'-' || c.is_ascii_digit()));
    // SAFETY: every byte the emitters produce is an ASCII digit or `-`.
    unsafe { str::from_utf8_unchecked(bytes) }
}

/// Integers that can be written in decimal.
pub trait ToDecimal: Copy {
    /// The longest possible output, including a sign.
    const MAX_LEN: usize;

    /// The digit array the magnitude is emitted into, wide enough for any value.
    #[doc(hidden)]
    type Digits: Default + AsRef<[u8]>;

    /// The exact number of bytes `to_chars` writes for `self`, including a sign.
    fn decimal_len(self) -> usize;

    #[doc(hidden)]
    fn is_negative(self) -> bool;

    /// Writes the digits of the magnitude of `self` at the end of `buf` and
    /// returns the index of the first one.
    #[doc(hidden)]
    fn write_digits(self, buf: &mut Self::Digits) -> usize;

    /// Writes `self` at the front of `buf` and returns the number of bytes written.
    /// Fails without touching `buf` when it is shorter than `self.decimal_len()`.
    fn to_chars(self, buf: &mut [u8]) -> Result<usize, Error> {
        let len = self.decimal_len();
        if buf.len() < len {
            debug!("cannot write {} bytes into a buffer of {}", len, buf.len());
            return Err(Error::BufferTooSmall { needed: len, capacity: buf.len() });
        }
        let mut digits = Self::Digits::default();
        let start = self.write_digits(&mut digits);
        let digits = &digits.as_ref()[start..];
        let sign = self.is_negative() as usize;
        debug_assert_eq!(sign + digits.len(), len);
        if sign > 0 {
            buf[0] = b'-';
        }
        buf[sign..len].copy_from_slice(digits);
        Ok(len)
    }

    /// Allocates exactly `self.decimal_len()` bytes and writes `self` into them.
    fn to_dec_string(self) -> String {
        let mut s = String::with_capacity(self.decimal_len());
        let mut digits = Self::Digits::default();
        let start = self.write_digits(&mut digits);
        if self.is_negative() {
            s.push('-');
        }
        s.push_str(ascii_str(&digits.as_ref()[start..]));
        debug_assert_eq!(s.len(), self.decimal_len());
        s
    }

    /// Writes `self` into a stack buffer of the largest possible size and copies
    /// out the used part. Skips the digit count.
    fn to_dec_string_unsized(self) -> String {
        let mut digits = Self::Digits::default();
        let start = self.write_digits(&mut digits);
        let digits = ascii_str(&digits.as_ref()[start..]);
        let sign = self.is_negative() as usize;
        let mut s = String::with_capacity(sign + digits.len());
        if sign > 0 {
            s.push('-');
        }
        s.push_str(digits);
        s
    }
}

macro_rules! impl_unsigned {
    ($($t:ty: $len:expr, $emit:ident as $e:ty => $digits:ty, $count:ident as $c:ty;)*) => ($(
        impl ToDecimal for $t {
            const MAX_LEN: usize = $len;
            type Digits = $digits;

            #[inline]
            fn decimal_len(self) -> usize {
                $count(self as $c) as usize
            }

            #[inline]
            fn is_negative(self) -> bool {
                false
            }

            #[inline]
            fn write_digits(self, buf: &mut $digits) -> usize {
                best::$emit(self as $e, buf)
            }
        }
    )*)
}

impl_unsigned! {
    u8: NDIGITS8, u8_to_digits as u8 => Digits8, digit_count_u32 as u32;
    u16: NDIGITS16, u16_to_digits as u16 => Digits16, digit_count_u32 as u32;
    u32: NDIGITS32, u32_to_digits as u32 => Digits32, digit_count_u32 as u32;
    u64: NDIGITS64, u64_to_digits as u64 => Digits64, digit_count_u64 as u64;
    usize: USIZE_LEN, u64_to_digits as u64 => Digits64, digit_count_u64 as u64;
}

// the magnitude comes from `unsigned_abs`, so `MIN` is never negated in its own type.
macro_rules! impl_signed {
    ($($t:ty: $len:expr, $u:ty;)*) => ($(
        impl ToDecimal for $t {
            const MAX_LEN: usize = $len;
            type Digits = <$u as ToDecimal>::Digits;

            #[inline]
            fn decimal_len(self) -> usize {
                (self < 0) as usize + self.unsigned_abs().decimal_len()
            }

            #[inline]
            fn is_negative(self) -> bool {
                self < 0
            }

            #[inline]
            fn write_digits(self, buf: &mut Self::Digits) -> usize {
                self.unsigned_abs().write_digits(buf)
            }
        }
    )*)
}

impl_signed! {
    i8: NDIGITS8 + 1, u8;
    i16: NDIGITS16 + 1, u16;
    i32: NDIGITS32 + 1, u32;
    i64: NDIGITS64, u64; // 922 3372 0368 5477 5808
    isize: ISIZE_LEN, usize;
}

/// Writes `n` at the front of `buf`. See `ToDecimal::to_chars`.
#[inline]
pub fn to_chars<T: ToDecimal>(n: T, buf: &mut [u8]) -> Result<usize, Error> {
    n.to_chars(buf)
}

/// Converts `n` to a string, sizing the allocation with the digit count first.
#[inline]
pub fn to_string<T: ToDecimal>(n: T) -> String {
    n.to_dec_string()
}

/// Converts `n` to a string through a maximal stack buffer, without counting digits.
#[inline]
pub fn to_string_unsized<T: ToDecimal>(n: T) -> String {
    n.to_dec_string_unsized()
}

/// Formats the wrapped integer with the emitters in this module.
/// Width, fill and the `+` flag work as they do for the primitive types.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Decimal<T>(pub T);

impl<T: ToDecimal> fmt::Display for Decimal<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut digits = T::Digits::default();
        let start = self.0.write_digits(&mut digits);
        f.pad_integral(!self.0.is_negative(), "", ascii_str(&digits.as_ref()[start..]))
    }
}
