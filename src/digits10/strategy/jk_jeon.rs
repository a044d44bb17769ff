use crate::num::bsr64;
use crate::digits10::POW10_U64_CONST as POW10_U64;

const fn floor_log10_pow2(e: u64) -> u64 {
    (e * 1262611) >> 22
}

const fn ceil_log10_pow2(e: u64) -> u64 {
    if e == 0 { 0 } else { floor_log10_pow2(e) + 1 }
}

// Junekey Jeon's table. for `n` with `bsr(n) == i` and `ub = ceil(i * log10 2)`,
// `TABLE[i] + (n >> (i / 4))` carries into bit 52 exactly when `n >= 10^ub`,
// and the bits from 52 upward hold `ub` before that carry.
static TABLE: [u64; 64] = {
    let mut table = [0; 64];
    let mut i = 0;
    while i < 64 {
        let ub = ceil_log10_pow2(i as u64);
        table[i] = ((ub + 1) << 52) - (POW10_U64[ub as usize] >> (i / 4));
        i += 1;
    }
    table
};

#[cfg(test)] use crate::digits10::testing;

#[inline]
pub fn u64_digits10(n: u64) -> u32 {
    // `n | 1` has the same digit count as `n` and lets zero take the one-digit path.
    let n = n | 1;
    let i = bsr64(n);
    ((TABLE[i as usize] + (n >> (i / 4))) >> 52) as u32
}

#[inline]
pub fn u32_digits10(n: u32) -> u32 {
    u64_digits10(n as u64)
}

#[cfg(test)] #[test]
fn sanity_test() {
    testing::u32_sanity_test(u32_digits10);
    testing::u64_sanity_test(u64_digits10);
}
