//! Day 25: Let It Snow.
//!
//! Codes fill an infinite grid one diagonal at a time; each code is the
//! previous one times 252533, modulo 33554393, starting from 20151125.
//! The input names the target row and column.

use std::sync::LazyLock;

use anyhow::{Result, anyhow};
use regex::Regex;

use super::Solution;

const FIRST_CODE: u64 = 20151125;
const MULTIPLIER: u64 = 252533;
const MODULUS: u64 = 33554393;

static POSITION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"row (\d+), column (\d+)").unwrap());

pub fn solve(input: &str) -> Result<Solution> {
    let (row, column) = parse_position(input)?;
    Ok(Solution::one(25, code_at(row, column)?))
}

/// Extract the target row and column from the instruction text.
fn parse_position(input: &str) -> Result<(u64, u64)> {
    let caps = POSITION_RE
        .captures(input)
        .ok_or_else(|| anyhow!("no 'row R, column C' position in input"))?;
    // The regex only admits digits, so the only parse failure is overflow.
    let row = caps[1].parse().map_err(|_| anyhow!("row out of range"))?;
    let column = caps[2].parse().map_err(|_| anyhow!("column out of range"))?;
    Ok((row, column))
}

/// 1-based position of `(row, column)` in diagonal fill order.
///
/// Diagonal `d = row + column - 1` starts after `d*(d-1)/2` earlier codes;
/// `(row, column)` is the `column`-th entry on its diagonal.
fn sequence_index(row: u64, column: u64) -> u64 {
    let diagonal = row + column - 1;
    diagonal * (diagonal - 1) / 2 + column
}

fn code_at(row: u64, column: u64) -> Result<u64> {
    if row == 0 || column == 0 {
        return Err(anyhow!("row and column are 1-based"));
    }
    let index = sequence_index(row, column);
    Ok(FIRST_CODE * mod_pow(MULTIPLIER, index - 1, MODULUS) % MODULUS)
}

/// `base^exponent mod modulus` by square-and-multiply. Products stay below
/// 2^52, so `u64` arithmetic never overflows.
fn mod_pow(mut base: u64, mut exponent: u64, modulus: u64) -> u64 {
    let mut result = 1;
    base %= modulus;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result * base % modulus;
        }
        base = base * base % modulus;
        exponent >>= 1;
    }
    result
}
