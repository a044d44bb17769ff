use std::prelude::v1::*;

use crate::digits10::{POW10_U32, POW10_U64};

fn reference_len<T: ToString>(n: T) -> u32 {
    n.to_string().len() as u32
}

// checks all one-digit values, both sides of every power of ten,
// and both ends of every bit length against `core::fmt`.
pub fn u32_sanity_test<F: FnMut(u32) -> u32>(mut f: F) {
    for n in 0..10 {
        assert_eq!(f(n), 1, "digits10({})", n);
    }
    for k in 1..10 {
        let p = POW10_U32[k];
        assert_eq!(f(p - 1), k as u32, "digits10({})", p - 1);
        assert_eq!(f(p), k as u32 + 1, "digits10({})", p);
        assert_eq!(f(p + 1), k as u32 + 1, "digits10({})", p + 1);
    }
    for bsr in 0..32 {
        let lo = 1u32 << bsr;
        let hi = lo | (lo - 1);
        assert_eq!(f(lo), reference_len(lo), "digits10({})", lo);
        assert_eq!(f(hi), reference_len(hi), "digits10({})", hi);
    }
    assert_eq!(f(u32::MAX), 10);
}

pub fn u64_sanity_test<F: FnMut(u64) -> u32>(mut f: F) {
    for n in 0..10 {
        assert_eq!(f(n), 1, "digits10({})", n);
    }
    for k in 1..20 {
        let p = POW10_U64[k];
        assert_eq!(f(p - 1), k as u32, "digits10({})", p - 1);
        assert_eq!(f(p), k as u32 + 1, "digits10({})", p);
        assert_eq!(f(p + 1), k as u32 + 1, "digits10({})", p + 1);
    }
    for bsr in 0..64 {
        let lo = 1u64 << bsr;
        let hi = lo | (lo - 1);
        assert_eq!(f(lo), reference_len(lo), "digits10({})", lo);
        assert_eq!(f(hi), reference_len(hi), "digits10({})", hi);
    }
    assert_eq!(f(u64::MAX), 20);
}
