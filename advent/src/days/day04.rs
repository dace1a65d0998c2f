//! Day 4: The Ideal Stocking Stuffer.
//!
//! Brute-force search for the lowest number whose MD5 digest, appended to
//! the secret key, starts with five (part one) then six (part two) hex
//! zeros. The input text is the secret key.

use anyhow::{Result, bail};
use md5::{Digest, Md5};

use super::Solution;

pub fn solve(input: &str) -> Result<Solution> {
    let key = input.trim();
    if key.is_empty() {
        bail!("secret key is empty");
    }
    Ok(Solution::two(
        4,
        lowest_with_zero_prefix(key, 5),
        lowest_with_zero_prefix(key, 6),
    ))
}

fn digest_hex(key: &str, number: u64) -> String {
    hex::encode(Md5::digest(format!("{key}{number}")))
}

/// Lowest nonnegative number whose digest starts with `zeros` hex zeros.
fn lowest_with_zero_prefix(key: &str, zeros: usize) -> u64 {
    let prefix = "0".repeat(zeros);
    let mut number = 0u64;
    loop {
        if digest_hex(key, number).starts_with(&prefix) {
            return number;
        }
        number += 1;
    }
}
