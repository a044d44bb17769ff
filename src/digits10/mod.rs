//! Counting decimal digits of unsigned integers.
//!
//! The number of digits of `n` is `floor(log10(n)) + 1` (and 1 for zero).
//! `digit_count_u32` and `digit_count_u64` use the bit-scan estimator in
//! `strategy::bsr`; the other strategies are kept for comparison and testing.

use log::debug;

use crate::error::Error;

pub mod strategy {
    pub mod naive;
    pub mod unroll4;
    pub mod grisu;
    pub mod clz;
    pub mod bsr;
    pub mod willets;
    pub mod jk_jeon;
    pub mod best;
}

#[cfg(test)] mod testing;

const fn make_pow10<const N: usize>() -> [u64; N] {
    let mut table = [0; N];
    let mut p = 1;
    let mut i = 0;
    while i < N {
        table[i] = p;
        if i + 1 < N { p *= 10; }
        i += 1;
    }
    table
}

// `table[t]` is the smallest number with `t` digits, except that the entry for
// `t = 1` is zero rather than one: every value in the 1-digit bucket already has
// exactly one digit, so the correction `t - (n < table[t])` must never fire there.
// `t = 0` is never looked up.
const fn make_zero_or_pow10<const N: usize>() -> [u64; N] {
    let mut table = [0; N];
    let mut p = 10;
    let mut t = 2;
    while t < N {
        table[t] = p;
        if t + 1 < N { p *= 10; }
        t += 1;
    }
    table
}

const fn narrow<const N: usize>(wide: [u64; N]) -> [u32; N] {
    let mut table = [0; N];
    let mut i = 0;
    while i < N {
        table[i] = wide[i] as u32;
        i += 1;
    }
    table
}

// const copies for building the strategy tables at compile time.
pub(crate) const POW10_U64_CONST: [u64; 20] = make_pow10::<20>();
pub(crate) const POW10_U32_CONST: [u32; 10] = narrow(make_pow10::<10>());

/// `POW10_U64[i] == 10^i`.
pub static POW10_U64: [u64; 20] = POW10_U64_CONST;

/// `POW10_U32[i] == 10^i`.
pub static POW10_U32: [u32; 10] = POW10_U32_CONST;

pub static ZERO_OR_POW10_U64: [u64; 21] = make_zero_or_pow10::<21>();
pub static ZERO_OR_POW10_U32: [u32; 11] = narrow(make_zero_or_pow10::<11>());

// maps bsr(n) to ceil(log10(2^(bsr(n)+1) - 1)), the largest digit count in that bucket.
// the true count is either this value or one less.
pub static BSR2LOG10: [u8; 64] = [
     1,  1,  1,  2,  2,  2,  3,  3,  3,  4,  4,  4,  4,  5,  5,  5,
     6,  6,  6,  7,  7,  7,  7,  8,  8,  8,  9,  9,  9, 10, 10, 10,
    10, 11, 11, 11, 12, 12, 12, 13, 13, 13, 13, 14, 14, 14, 15, 15,
    15, 16, 16, 16, 16, 17, 17, 17, 18, 18, 18, 19, 19, 19, 19, 20,
];

/// Returns the number of decimal digits in `n`. `digit_count_u32(0) == 1`.
#[inline]
pub fn digit_count_u32(n: u32) -> u32 {
    strategy::best::u32_digits10(n)
}

/// Returns the number of decimal digits in `n`. `digit_count_u64(0) == 1`.
#[inline]
pub fn digit_count_u64(n: u64) -> u32 {
    strategy::best::u64_digits10(n)
}

/// Unsigned integers whose decimal width can be determined.
///
/// This is deliberately not implemented for signed integers; the caller decides
/// whether a sign takes up a byte.
pub trait DigitCount: Copy + Sized {
    /// The number of digits in `Self::MAX`.
    const MAX_DIGITS: u32;

    /// The number of digits in the decimal representation of `self`.
    fn digit_count(self) -> u32;

    /// The smallest value with exactly `digits` digits.
    fn min_number(digits: u32) -> Result<Self, Error>;

    /// The largest value with exactly `digits` digits.
    fn max_number(digits: u32) -> Result<Self, Error>;
}

fn check_digits(digits: u32, max: u32) -> Result<(), Error> {
    if digits == 0 || digits > max {
        debug!("rejecting digit count {} (maximum {})", digits, max);
        return Err(Error::DigitCountOutOfRange { digits, max });
    }
    Ok(())
}

macro_rules! impl_digit_count {
    ($($t:ty: $max:expr, $count:ident as $wide:ty;)*) => ($(
        impl DigitCount for $t {
            const MAX_DIGITS: u32 = $max;

            #[inline]
            fn digit_count(self) -> u32 {
                $count(self as $wide)
            }

            fn min_number(digits: u32) -> Result<$t, Error> {
                check_digits(digits, Self::MAX_DIGITS)?;
                if digits == 1 { Ok(0) } else { Ok(POW10_U64[digits as usize - 1] as $t) }
            }

            fn max_number(digits: u32) -> Result<$t, Error> {
                check_digits(digits, Self::MAX_DIGITS)?;
                if digits == Self::MAX_DIGITS {
                    Ok(<$t>::MAX)
                } else {
                    Ok((POW10_U64[digits as usize] - 1) as $t)
                }
            }
        }
    )*)
}

#[cfg(target_pointer_width = "64")] const USIZE_DIGITS: u32 = 20;
#[cfg(target_pointer_width = "32")] const USIZE_DIGITS: u32 = 10;
#[cfg(target_pointer_width = "16")] const USIZE_DIGITS: u32 = 5;

impl_digit_count! {
    u8: 3, digit_count_u32 as u32;
    u16: 5, digit_count_u32 as u32;
    u32: 10, digit_count_u32 as u32;
    u64: 20, digit_count_u64 as u64;
    usize: USIZE_DIGITS, digit_count_u64 as u64;
}

/// Same as `T::min_number(digits)`.
pub fn min_number<T: DigitCount>(digits: u32) -> Result<T, Error> {
    T::min_number(digits)
}

/// Same as `T::max_number(digits)`.
pub fn max_number<T: DigitCount>(digits: u32) -> Result<T, Error> {
    T::max_number(digits)
}

/// Digit counting algorithms selectable at runtime, mostly for benchmarking.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Strategy {
    Naive,
    Unroll4,
    Grisu,
    Clz,
    Bsr,
    Willets,
    JkJeon,
}

impl Strategy {
    pub const ALL: [Strategy; 7] = [
        Strategy::Naive, Strategy::Unroll4, Strategy::Grisu, Strategy::Clz,
        Strategy::Bsr, Strategy::Willets, Strategy::JkJeon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Naive => "naive",
            Strategy::Unroll4 => "unroll4",
            Strategy::Grisu => "grisu",
            Strategy::Clz => "clz",
            Strategy::Bsr => "bsr",
            Strategy::Willets => "willets",
            Strategy::JkJeon => "jk_jeon",
        }
    }

    #[inline]
    pub fn u32_digits10(self, n: u32) -> u32 {
        use crate::digits10::strategy::*;
        match self {
            Strategy::Naive => naive::u32_digits10(n),
            Strategy::Unroll4 => unroll4::u32_digits10(n),
            Strategy::Grisu => grisu::u32_digits10(n),
            Strategy::Clz => clz::u32_digits10(n),
            Strategy::Bsr => bsr::u32_digits10(n),
            Strategy::Willets => willets::u32_digits10(n),
            Strategy::JkJeon => jk_jeon::u32_digits10(n),
        }
    }
}
