//! Day 1: Not Quite Lisp.
//!
//! `(` goes up a floor, `)` goes down. Part one is the final floor; part
//! two is the 1-based position of the first step into the basement.

use anyhow::{Result, bail};

use super::Solution;

pub fn solve(input: &str) -> Result<Solution> {
    let steps = input.trim();
    Ok(Solution::two(
        1,
        final_floor(steps),
        first_basement_step(steps)?,
    ))
}

fn step(ch: char) -> i64 {
    match ch {
        '(' => 1,
        ')' => -1,
        _ => 0,
    }
}

fn final_floor(steps: &str) -> i64 {
    steps.chars().map(step).sum()
}

/// 1-based position of the first step that puts Santa below floor 0.
fn first_basement_step(steps: &str) -> Result<usize> {
    let mut floor = 0i64;
    for (index, ch) in steps.chars().enumerate() {
        floor += step(ch);
        if floor < 0 {
            return Ok(index + 1);
        }
    }
    bail!("never enters the basement")
}
