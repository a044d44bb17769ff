use crate::num::div_rem;

use crate::int2dec::digits::{DIGIT_PAIRS, Digits64, Digits32, Digits16, Digits8};
#[cfg(test)] use crate::int2dec::testing;

#[inline(always)]
fn put_pair(buf: &mut [u8], i: usize, r: usize) {
    buf[i..i + 2].copy_from_slice(&DIGIT_PAIRS[r]);
}

// two digits per division. the remaining one or two leading digits are written
// without dividing; a lone digit skips the table.
macro_rules! div100_to_digits {
    ($($name:ident: $t:ty => $digits:ty;)*) => ($(
        // writes the digits of `n` at the end of `buf` and returns the index of the first one.
        // `buf` holds the widest value of the type, so the writes stay in bounds.
        pub fn $name(mut n: $t, buf: &mut $digits) -> usize {
            let mut i = buf.len();
            while n >= 100 {
                let (q, r) = div_rem(n, 100);
                i -= 2;
                put_pair(buf, i, r as usize);
                n = q;
            }
            if n >= 10 {
                i -= 2;
                put_pair(buf, i, n as usize);
            } else {
                i -= 1;
                buf[i] = n as u8 + b'0';
            }
            i
        }
    )*)
}

div100_to_digits! {
    u64_to_digits: u64 => Digits64;
    u32_to_digits: u32 => Digits32;
    u16_to_digits: u16 => Digits16;
    u8_to_digits: u8 => Digits8;
}

#[cfg(test)] #[test]
fn sanity_test() {
    testing::u64_sanity_test(u64_to_digits);
    testing::u32_sanity_test(u32_to_digits);
    testing::u16_sanity_test(u16_to_digits);
    testing::u8_sanity_test(u8_to_digits);
}
