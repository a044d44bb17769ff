use thiserror::Error;

#[derive(Error, Copy, Clone, PartialEq, Eq, Debug)]
pub enum Error {
    /// The output buffer cannot hold the formatted number. Nothing was written.
    #[error("buffer too small: {needed} bytes needed, {capacity} available")]
    BufferTooSmall { needed: usize, capacity: usize },

    /// No value of the requested type has this many decimal digits.
    #[error("digit count {digits} is out of range 1..={max}")]
    DigitCountOutOfRange { digits: u32, max: u32 },
}
