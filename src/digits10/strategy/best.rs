pub use super::bsr::{u32_digits10, u64_digits10};
