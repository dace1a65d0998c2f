//! Day 14: Reindeer Olympics.
//!
//! Each reindeer alternates a burst of flight with mandatory rest. Part one
//! is the winning distance after 2503 seconds; part two awards a point each
//! second to the current leader(s) and reports the winning score.

use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow};
use regex::Regex;
use tracing::debug;

use super::Solution;

const RACE_TIME: u64 = 2503;

static REINDEER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+) can fly (\d+) km/s for (\d+) seconds, but then must rest for (\d+) seconds\.$")
        .unwrap()
});

pub fn solve(input: &str) -> Result<Solution> {
    let reindeer = parse_reindeer(input)?;
    let (distance_winner, distance) = winner_by_distance(&reindeer, RACE_TIME)?;
    let (points_winner, points) = winner_by_points(&reindeer, RACE_TIME)?;
    debug!(%distance_winner, %points_winner, "race finished");
    Ok(Solution::two(14, distance, points))
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Reindeer {
    name: String,
    speed: u64,
    fly_time: u64,
    rest_time: u64,
}

impl Reindeer {
    /// Distance covered after `time` seconds of fly/rest cycling.
    fn distance_after(&self, time: u64) -> u64 {
        let cycle = self.fly_time + self.rest_time;
        let full_cycles = time / cycle;
        let in_last_cycle = (time % cycle).min(self.fly_time);
        (full_cycles * self.fly_time + in_last_cycle) * self.speed
    }
}

fn parse_reindeer(input: &str) -> Result<Vec<Reindeer>> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(index, line)| parse_line(line).with_context(|| format!("line {}", index + 1)))
        .collect()
}

fn parse_line(line: &str) -> Result<Reindeer> {
    let caps = REINDEER_RE
        .captures(line.trim())
        .ok_or_else(|| anyhow!("unrecognized reindeer '{}'", line.trim()))?;
    Ok(Reindeer {
        name: caps[1].to_string(),
        speed: caps[2].parse().context("speed")?,
        fly_time: caps[3].parse().context("fly time")?,
        rest_time: caps[4].parse().context("rest time")?,
    })
}

/// Winning reindeer and distance after `race_time` seconds.
fn winner_by_distance(reindeer: &[Reindeer], race_time: u64) -> Result<(String, u64)> {
    reindeer
        .iter()
        .map(|deer| (deer.name.clone(), deer.distance_after(race_time)))
        .max_by_key(|(_, distance)| *distance)
        .ok_or_else(|| anyhow!("no reindeer"))
}

/// Winning reindeer and points, where every second each currently leading
/// reindeer (ties included) gains one point.
fn winner_by_points(reindeer: &[Reindeer], race_time: u64) -> Result<(String, u64)> {
    let mut points = vec![0u64; reindeer.len()];

    for time in 1..=race_time {
        let distances: Vec<u64> = reindeer
            .iter()
            .map(|deer| deer.distance_after(time))
            .collect();
        let lead = distances.iter().max().copied().unwrap_or(0);
        for (index, distance) in distances.iter().enumerate() {
            if *distance == lead {
                points[index] += 1;
            }
        }
    }

    reindeer
        .iter()
        .zip(&points)
        .map(|(deer, score)| (deer.name.clone(), *score))
        .max_by_key(|(_, score)| *score)
        .ok_or_else(|| anyhow!("no reindeer"))
}
