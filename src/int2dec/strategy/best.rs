pub use super::div100::{u64_to_digits, u32_to_digits, u16_to_digits, u8_to_digits};
