use core::ops::{Div, Rem};

pub fn div_rem<T: Copy + Div<Output = T> + Rem<Output = T>>(x: T, y: T) -> (T, T) {
    (x / y, x % y)
}

// index of the highest set bit. 0 is treated as 1 so the result is always defined.
#[inline(always)]
pub fn bsr32(x: u32) -> u32 {
    (x | 1).leading_zeros() ^ 31
}

#[inline(always)]
pub fn bsr64(x: u64) -> u32 {
    (x | 1).leading_zeros() ^ 63
}

#[cfg(test)] #[test]
fn test_bsr() {
    assert_eq!(bsr32(0), 0);
    assert_eq!(bsr32(1), 0);
    assert_eq!(bsr32(2), 1);
    assert_eq!(bsr32(3), 1);
    assert_eq!(bsr32(0x8000_0000), 31);
    assert_eq!(bsr32(u32::MAX), 31);

    assert_eq!(bsr64(0), 0);
    assert_eq!(bsr64(1023), 9);
    assert_eq!(bsr64(1024), 10);
    assert_eq!(bsr64(u64::MAX), 63);
}
