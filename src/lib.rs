/* Intconv -- Decimal digit counting and integer-to-string conversion
 * routines and benchmarks for Rust.
 *
 * The author disclaims copyright to this source code.  In place of
 * a legal notice, here is a blessing:
 *
 *    May you do good and not evil.
 *    May you find forgiveness for yourself and forgive others.
 *    May you share freely, never taking more than you give.
 *
 * This legal notice and blessing is shamelessly adopted from
 * the SQLite library.
 */

#![no_std]

extern crate alloc;

// tests only
#[cfg(test)] #[macro_use] extern crate std;

mod num;
mod error;

pub mod digits10;
pub mod int2dec;

pub use error::Error;
pub use digits10::{digit_count_u32, digit_count_u64, DigitCount};
pub use int2dec::{to_chars, to_string, to_string_unsized, Decimal, ToDecimal};
