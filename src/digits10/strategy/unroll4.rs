// four comparisons per division by 10^4.

#[cfg(test)] use crate::digits10::testing;

pub fn u32_digits10(mut n: u32) -> u32 {
    let mut result = 1;
    loop {
        if n < 10 { return result; }
        if n < 100 { return result + 1; }
        if n < 1000 { return result + 2; }
        if n < 10000 { return result + 3; }
        n /= 10000;
        result += 4;
    }
}

pub fn u64_digits10(mut n: u64) -> u32 {
    let mut result = 1;
    loop {
        if n < 10 { return result; }
        if n < 100 { return result + 1; }
        if n < 1000 { return result + 2; }
        if n < 10000 { return result + 3; }
        n /= 10000;
        result += 4;
    }
}

#[cfg(test)] #[test]
fn sanity_test() {
    testing::u32_sanity_test(u32_digits10);
    testing::u64_sanity_test(u64_digits10);
}
