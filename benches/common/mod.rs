//! Data sets shared by the benchmarks. Every generator is seeded, so runs are comparable.

#![allow(dead_code)]

use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use intconv::digits10::{max_number, min_number};

pub fn init_logging() {
    let _ = env_logger::builder().filter_level(log::LevelFilter::Info).try_init();
}

/// 100 numbers with exactly `num_digits` digits, uniformly distributed.
pub fn generate_numbers(num_digits: u32) -> Vec<u32> {
    let lo = min_number::<u32>(num_digits).expect("digit count out of range");
    let hi = max_number::<u32>(num_digits).expect("digit count out of range");
    let mut rng = StdRng::seed_from_u64(0);
    let numbers: Vec<u32> = (0..100).map(|_| rng.gen_range(lo..=hi)).collect();
    info!("generated {} numbers with {} digits in {}..={}", numbers.len(), num_digits, lo, hi);
    numbers
}

const RAND_MAX: i32 = i32::MAX;

/// The int generator data set: `(rand() * rand()) / (rand() / 100 + 1)`, where the
/// product wraps around and so yields negative numbers as well.
pub fn karma_data(count: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(0);
    let values: Vec<i32> = (0..count)
        .map(|_| {
            let scale = rng.gen_range(0..=RAND_MAX) / 100 + 1;
            let a = rng.gen_range(0..=RAND_MAX);
            let b = rng.gen_range(0..=RAND_MAX);
            a.wrapping_mul(b) / scale
        })
        .collect();
    info!("generated {} values for the int generator data set", values.len());
    values
}

/// `numbers_per_digit` consecutive values for every width from 1 to 10 digits,
/// wrapping around inside each width, then shuffled.
pub fn per_digit_data(numbers_per_digit: usize) -> Vec<i32> {
    let mut data = Vec::with_capacity(10 * numbers_per_digit);
    for num_digits in 1..=10 {
        let first = min_number::<u32>(num_digits).expect("digit count out of range") as i32;
        let last = max_number::<u32>(num_digits)
            .expect("digit count out of range")
            .min(i32::MAX as u32) as i32;
        let mut value = first;
        for _ in 0..numbers_per_digit {
            data.push(value);
            value = if value < last { value + 1 } else { first };
        }
    }
    data.shuffle(&mut StdRng::seed_from_u64(0));
    info!("generated {} values with 1 to 10 digits", data.len());
    data
}
