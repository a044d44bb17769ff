// one division per digit. slow, but obviously correct.

#[cfg(test)] use crate::digits10::testing;

pub fn u32_digits10(mut n: u32) -> u32 {
    let mut result = 0;
    loop {
        result += 1;
        n /= 10;
        if n == 0 { return result; }
    }
}

pub fn u64_digits10(mut n: u64) -> u32 {
    let mut result = 0;
    loop {
        result += 1;
        n /= 10;
        if n == 0 { return result; }
    }
}

#[cfg(test)] #[test]
fn sanity_test() {
    testing::u32_sanity_test(u32_digits10);
    testing::u64_sanity_test(u64_digits10);
}
