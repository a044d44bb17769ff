use crate::num::{bsr32, bsr64};
use crate::digits10::{BSR2LOG10, ZERO_OR_POW10_U32, ZERO_OR_POW10_U64};

#[cfg(test)] use crate::digits10::testing;

// `BSR2LOG10` gives the largest digit count possible for the bit length of `n`.
// it overshoots by one exactly when `n` is below the smallest number of that many digits.
#[inline]
pub fn u32_digits10(n: u32) -> u32 {
    let t = BSR2LOG10[bsr32(n) as usize] as u32;
    t - (n < ZERO_OR_POW10_U32[t as usize]) as u32
}

#[inline]
pub fn u64_digits10(n: u64) -> u32 {
    let t = BSR2LOG10[bsr64(n) as usize] as u32;
    t - (n < ZERO_OR_POW10_U64[t as usize]) as u32
}

#[cfg(test)] #[test]
fn sanity_test() {
    testing::u32_sanity_test(u32_digits10);
    testing::u64_sanity_test(u64_digits10);
}
