use std::prelude::v1::*;
use std::str;

use crate::int2dec::digits::{NDIGITS64, NDIGITS32, NDIGITS16, NDIGITS8};
use crate::int2dec::digits::{Digits64, Digits32, Digits16, Digits8};

macro_rules! check_digits {
    ($f:ident, $ndigits:expr, $n:expr => $expected:expr) => ({
        // prefill so that writes before the returned start are noticed
        let n = $n;
        let mut buf = [b'#'; $ndigits];
        let start = $f(n, &mut buf);
        assert_eq!(str::from_utf8(&buf[start..]).unwrap(), $expected, "digits of {}", n);
        assert!(buf[..start].iter().all(|&c| c == b'#'), "wrote before the digits of {}", n);
    })
}

pub fn u64_sanity_test<F: FnMut(u64, &mut Digits64) -> usize>(mut f: F) {
    check_digits!(f, NDIGITS64,                    0 => "0");
    check_digits!(f, NDIGITS64,                    1 => "1");
    check_digits!(f, NDIGITS64,                   12 => "12");
    check_digits!(f, NDIGITS64,                  123 => "123");
    check_digits!(f, NDIGITS64,              1234567 => "1234567");
    check_digits!(f, NDIGITS64,      123456789012345 => "123456789012345");
    check_digits!(f, NDIGITS64, 10000000000000000000 => "10000000000000000000");
    check_digits!(f, NDIGITS64, 18446744073709551615 => "18446744073709551615");
}

pub fn u32_sanity_test<F: FnMut(u32, &mut Digits32) -> usize>(mut f: F) {
    check_digits!(f, NDIGITS32,          0 => "0");
    check_digits!(f, NDIGITS32,          1 => "1");
    check_digits!(f, NDIGITS32,         12 => "12");
    check_digits!(f, NDIGITS32,        100 => "100");
    check_digits!(f, NDIGITS32,    1234567 => "1234567");
    check_digits!(f, NDIGITS32, 1000000000 => "1000000000");
    check_digits!(f, NDIGITS32, 4294967295 => "4294967295");
}

pub fn u16_sanity_test<F: FnMut(u16, &mut Digits16) -> usize>(mut f: F) {
    check_digits!(f, NDIGITS16,     0 => "0");
    check_digits!(f, NDIGITS16,     1 => "1");
    check_digits!(f, NDIGITS16,    12 => "12");
    check_digits!(f, NDIGITS16,   123 => "123");
    check_digits!(f, NDIGITS16, 10000 => "10000");
    check_digits!(f, NDIGITS16, 65535 => "65535");
}

pub fn u8_sanity_test<F: FnMut(u8, &mut Digits8) -> usize>(mut f: F) {
    check_digits!(f, NDIGITS8,   0 => "0");
    check_digits!(f, NDIGITS8,   1 => "1");
    check_digits!(f, NDIGITS8,  12 => "12");
    check_digits!(f, NDIGITS8, 100 => "100");
    check_digits!(f, NDIGITS8, 255 => "255");
}

// visits small integers (4, 5, 6, ..., 3424806) and then powers of three, wrapping.
pub fn rotating_values() -> impl Iterator<Item = u64> {
    let small = (0..64).scan(4u64, |n, _| { let v = *n; *n = n.wrapping_add(*n >> 2); Some(v) });
    let large = (0..64).scan(1u64, |n, _| { let v = *n; *n = n.wrapping_mul(3); Some(v) });
    small.chain(large)
}
