use crate::digits10::POW10_U32_CONST as POW10_U32;

// `P[t]` is `10^t` except that `P[0]` is zero.
static P: [u32; 10] = {
    let mut table = POW10_U32;
    table[0] = 0;
    table
};

#[cfg(test)] use crate::digits10::testing;

// `(bits * 1233) >> 12` approximates `bits * log10(2)` from below, so `t + 1` is
// the digit count unless `n` falls short of `10^t`.
pub fn u32_digits10(n: u32) -> u32 {
    let bits = 32 - (n | 1).leading_zeros();
    let t = (bits * 1233) >> 12;
    t - (n < P[t as usize]) as u32 + 1
}

#[cfg(test)] #[test]
fn sanity_test() {
    testing::u32_sanity_test(u32_digits10);
}
