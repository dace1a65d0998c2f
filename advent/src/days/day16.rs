//! Day 16: Aunt Sue.
//!
//! Five hundred aunts, each with a partial property list; find the one
//! matching the ticker tape exactly (part one), then with ranged readings
//! (part two): `cats` and `trees` read low, `pomeranians` and `goldfish`
//! read high.

use std::collections::HashMap;
use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow};
use regex::Regex;

use super::Solution;

static SUE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^Sue (\d+): (.+)$").unwrap());

/// The ticker tape readout the gift sender must match.
const TARGET: [(&str, u64); 10] = [
    ("children", 3),
    ("cats", 7),
    ("samoyeds", 2),
    ("pomeranians", 3),
    ("akitas", 0),
    ("vizslas", 0),
    ("goldfish", 5),
    ("trees", 3),
    ("cars", 2),
    ("perfumes", 1),
];

pub fn solve(input: &str) -> Result<Solution> {
    let sues = parse_sues(input)?;
    let exact = find_matching_sue(&sues, matches_exactly)
        .ok_or_else(|| anyhow!("no aunt matches exactly"))?;
    let ranged = find_matching_sue(&sues, matches_with_ranges)
        .ok_or_else(|| anyhow!("no aunt matches with ranges"))?;
    Ok(Solution::two(16, exact, ranged))
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Sue {
    number: u64,
    /// Only the remembered properties; an absent key is unknown, not zero,
    /// and never disqualifies a candidate.
    properties: HashMap<String, u64>,
}

fn parse_sues(input: &str) -> Result<Vec<Sue>> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(index, line)| parse_sue(line).with_context(|| format!("line {}", index + 1)))
        .collect()
}

fn parse_sue(line: &str) -> Result<Sue> {
    let caps = SUE_RE
        .captures(line.trim())
        .ok_or_else(|| anyhow!("unrecognized aunt '{}'", line.trim()))?;
    let number = caps[1].parse().context("aunt number")?;

    let mut properties = HashMap::new();
    for item in caps[2].split(", ") {
        let (key, value) = item
            .split_once(": ")
            .ok_or_else(|| anyhow!("malformed property '{item}'"))?;
        let value = value
            .parse()
            .with_context(|| format!("value of '{key}'"))?;
        properties.insert(key.to_string(), value);
    }

    Ok(Sue { number, properties })
}

fn find_matching_sue(sues: &[Sue], matches: fn(&str, u64, u64) -> bool) -> Option<u64> {
    sues.iter()
        .find(|sue| {
            sue.properties.iter().all(|(key, &value)| {
                TARGET
                    .iter()
                    .find(|(name, _)| *name == key.as_str())
                    .is_none_or(|&(_, target)| matches(key, value, target))
            })
        })
        .map(|sue| sue.number)
}

fn matches_exactly(_key: &str, value: u64, target: u64) -> bool {
    value == target
}

fn matches_with_ranges(key: &str, value: u64, target: u64) -> bool {
    match key {
        "cats" | "trees" => value > target,
        "pomeranians" | "goldfish" => value < target,
        _ => value == target,
    }
}
