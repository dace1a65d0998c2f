//! Day 5: Doesn't He Have Intern-Elves For This?
//!
//! Counts "nice" strings under the old rules (part one) and the new rules
//! (part two).

use std::collections::HashMap;

use anyhow::Result;

use super::Solution;

const NAUGHTY_SUBSTRINGS: [&str; 4] = ["ab", "cd", "pq", "xy"];

pub fn solve(input: &str) -> Result<Solution> {
    let candidates: Vec<&str> = input.lines().filter(|line| !line.is_empty()).collect();
    let old = candidates.iter().filter(|s| is_nice(s)).count();
    let new = candidates.iter().filter(|s| is_nice_v2(s)).count();
    Ok(Solution::two(5, old, new))
}

/// Old rules: at least three vowels, a doubled letter, and none of the
/// naughty substrings.
fn is_nice(candidate: &str) -> bool {
    contains_three_vowels(candidate)
        && contains_double_letter(candidate)
        && !contains_naughty_substring(candidate)
}

/// New rules: a pair of letters appearing twice without overlapping, and a
/// letter that repeats with exactly one letter between.
fn is_nice_v2(candidate: &str) -> bool {
    contains_non_overlapping_repeated_pair(candidate)
        && contains_double_letter_with_gap(candidate)
}

fn contains_three_vowels(candidate: &str) -> bool {
    candidate
        .chars()
        .filter(|ch| "aeiou".contains(*ch))
        .nth(2)
        .is_some()
}

fn contains_double_letter(candidate: &str) -> bool {
    candidate.as_bytes().windows(2).any(|pair| pair[0] == pair[1])
}

fn contains_naughty_substring(candidate: &str) -> bool {
    NAUGHTY_SUBSTRINGS
        .iter()
        .any(|naughty| candidate.contains(naughty))
}

fn contains_non_overlapping_repeated_pair(candidate: &str) -> bool {
    let mut first_seen: HashMap<&[u8], usize> = HashMap::new();
    for (index, pair) in candidate.as_bytes().windows(2).enumerate() {
        match first_seen.get(pair) {
            // Adjacent occurrences like "aaa" overlap and do not count.
            Some(first) if index - first > 1 => return true,
            Some(_) => {}
            None => {
                first_seen.insert(pair, index);
            }
        }
    }
    false
}

fn contains_double_letter_with_gap(candidate: &str) -> bool {
    candidate
        .as_bytes()
        .windows(3)
        .any(|triple| triple[0] == triple[2])
}
