//! Day 10: Elves Look, Elves Say.
//!
//! Repeatedly expand a digit sequence with the look-and-say rule; report
//! the length after 40 expansions (part one) and after 50 (part two).

use anyhow::{Result, bail};

use super::Solution;

pub fn solve(input: &str) -> Result<Solution> {
    let mut sequence = input.trim().to_string();
    if sequence.is_empty() || !sequence.bytes().all(|b| b.is_ascii_digit()) {
        bail!("input must be a non-empty digit sequence");
    }

    for _ in 0..40 {
        sequence = look_and_say(&sequence);
    }
    let after_40 = sequence.len();

    for _ in 0..10 {
        sequence = look_and_say(&sequence);
    }
    let after_50 = sequence.len();

    Ok(Solution::two(10, after_40, after_50))
}

/// One look-and-say expansion: each run of equal digits becomes the run
/// length followed by the digit.
fn look_and_say(sequence: &str) -> String {
    let bytes = sequence.as_bytes();
    let mut out = String::with_capacity(bytes.len() * 2);

    let mut start = 0;
    for end in 1..=bytes.len() {
        if end == bytes.len() || bytes[end] != bytes[start] {
            out.push_str(&(end - start).to_string());
            out.push(bytes[start] as char);
            start = end;
        }
    }
    out
}
