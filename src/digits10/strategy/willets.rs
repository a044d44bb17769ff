use crate::num::bsr32;
use crate::digits10::POW10_U64_CONST as POW10_U64;

// Kendall Willets' trick: `INC[bsr]` is `(k << 32) - T` where `T` is the smallest
// `k`-digit number in the bucket (or zero). adding it to `n` bumps the upper
// half from `k - 1` to `k` exactly when `n >= T`.
static INC: [u64; 32] = {
    let mut table = [0; 32];
    let mut i = 0;
    while i < 32 {
        let k = if i / 3 < 9 { i / 3 } else { 9 };
        let threshold = if k == 0 { 0 } else { POW10_U64[k] };
        table[i] = ((k as u64 + 1) << 32) - threshold;
        i += 1;
    }
    table
};

#[cfg(test)] use crate::digits10::testing;

#[inline]
pub fn u32_digits10(n: u32) -> u32 {
    ((n as u64 + INC[bsr32(n) as usize]) >> 32) as u32
}

#[cfg(test)] #[test]
fn sanity_test() {
    testing::u32_sanity_test(u32_digits10);
}
