// one division per digit. kept as the reference the other emitters are checked against.

use crate::num::div_rem;
use crate::int2dec::digits::{Digits64, Digits32, Digits16, Digits8};

#[cfg(test)] use crate::int2dec::testing;

macro_rules! naive_to_digits {
    ($($name:ident: $t:ty => $digits:ty;)*) => ($(
        // writes the digits of `n` at the end of `buf` and returns the index of the first one.
        // `buf` holds the widest value of the type, so the writes stay in bounds.
        pub fn $name(mut n: $t, buf: &mut $digits) -> usize {
            let mut i = buf.len();
            loop {
                let (q, r) = div_rem(n, 10);
                i -= 1;
                buf[i] = r as u8 + b'0';
                n = q;
                if n == 0 { return i; }
            }
        }
    )*)
}

naive_to_digits! {
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
