//! Solvers for the 2015 puzzle days this repository covers.
//!
//! Each solver is self-contained: it takes the raw input text and returns a
//! [`Solution`]. File reading and printing stay in the binary.

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day09;
pub mod day10;
pub mod day14;
pub mod day16;
pub mod day25;

use anyhow::{Result, bail};
use serde::Serialize;

use crate::io::config::SolverConfig;

/// Days with a solver in this repository.
pub const DAYS: &[u8] = &[1, 2, 3, 4, 5, 6, 9, 10, 14, 16, 25];

/// Answers for one puzzle day. Day 25 has a single part; every other
/// covered day has two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub day: u8,
    pub part1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part2: Option<String>,
}

impl Solution {
    pub fn two(day: u8, part1: impl ToString, part2: impl ToString) -> Self {
        Self {
            day,
            part1: part1.to_string(),
            part2: Some(part2.to_string()),
        }
    }

    pub fn one(day: u8, part1: impl ToString) -> Self {
        Self {
            day,
            part1: part1.to_string(),
            part2: None,
        }
    }
}

/// Dispatch to the solver for `day`.
pub fn solve(day: u8, input: &str, config: &SolverConfig) -> Result<Solution> {
    match day {
        1 => day01::solve(input),
        2 => day02::solve(input),
        3 => day03::solve(input),
        4 => day04::solve(input),
        5 => day05::solve(input),
        6 => day06::solve(input, config),
        9 => day09::solve(input),
        10 => day10::solve(input),
        14 => day14::solve(input),
        16 => day16::solve(input),
        25 => day25::solve(input),
        _ => bail!("no solver for day {day} (available: {DAYS:?})"),
    }
}
