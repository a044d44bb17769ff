pub const NDIGITS64: usize = 20; // 1844 6744 0737 0955 1615
pub const NDIGITS32: usize = 10; // 42 9496 7295
pub const NDIGITS16: usize = 5; // 6 5535
pub const NDIGITS8: usize = 3; // 255

pub type Digit = u8;

pub type Digits64 = [Digit; NDIGITS64];
pub type Digits32 = [Digit; NDIGITS32];
pub type Digits16 = [Digit; NDIGITS16];
pub type Digits8 = [Digit; NDIGITS8];

// `DIGIT_PAIRS[r]` is the two ASCII digits of `r`, for `r < 100`.
pub static DIGIT_PAIRS: [[u8; 2]; 100] = {
    let mut table = [[0; 2]; 100];
    let mut i = 0;
    while i < 100 {
        table[i] = [b'0' + (i / 10) as u8, b'0' + (i % 10) as u8];
        i += 1;
    }
    table
};

#[cfg(test)] #[test]
fn test_digit_pairs() {
    use std::prelude::v1::*;

    assert_eq!(&DIGIT_PAIRS[0], b"00");
    assert_eq!(&DIGIT_PAIRS[7], b"07");
    assert_eq!(&DIGIT_PAIRS[42], b"42");
    assert_eq!(&DIGIT_PAIRS[99], b"99");
    for (i, pair) in DIGIT_PAIRS.iter().enumerate() {
        assert_eq!(std::str::from_utf8(pair).unwrap(), format!("{:02}", i));
    }
}
