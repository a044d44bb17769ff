// a plain comparison ladder, as used by the Grisu reference implementation.

#[cfg(test)] use crate::digits10::testing;

pub fn u32_digits10(n: u32) -> u32 {
    if n < 10 { return 1; }
    if n < 100 { return 2; }
    if n < 1000 { return 3; }
    if n < 10000 { return 4; }
    if n < 100000 { return 5; }
    if n < 1000000 { return 6; }
    if n < 10000000 { return 7; }
    if n < 100000000 { return 8; }
    if n < 1000000000 { return 9; }
    10
}

#[cfg(test)] #[test]
fn sanity_test() {
    testing::u32_sanity_test(u32_digits10);
}
