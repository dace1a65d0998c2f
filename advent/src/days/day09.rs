//! Day 9: All in a Single Night.
//!
//! Undirected routes `A to B = d`; find the shortest (part one) and longest
//! (part two) distance that visits every city exactly once, starting and
//! ending anywhere. Puzzle inputs cap at eight cities, so a permutation
//! search is adequate.

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow};
use itertools::Itertools;
use regex::Regex;

use super::Solution;

static ROUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+) to (\w+) = (\d+)$").unwrap());

pub fn solve(input: &str) -> Result<Solution> {
    let routes = parse_routes(input)?;
    let totals = tour_lengths(&routes);
    let shortest = totals.iter().min().ok_or_else(|| anyhow!("no routes"))?;
    let longest = totals.iter().max().ok_or_else(|| anyhow!("no routes"))?;
    Ok(Solution::two(9, shortest, longest))
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Route {
    from: String,
    to: String,
    distance: u64,
}

fn parse_routes(input: &str) -> Result<Vec<Route>> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(index, line)| parse_route(line).with_context(|| format!("line {}", index + 1)))
        .collect()
}

fn parse_route(line: &str) -> Result<Route> {
    let caps = ROUTE_RE
        .captures(line.trim())
        .ok_or_else(|| anyhow!("unrecognized route '{}'", line.trim()))?;
    Ok(Route {
        from: caps[1].to_string(),
        to: caps[2].to_string(),
        distance: caps[3]
            .parse()
            .with_context(|| format!("distance in '{}'", line.trim()))?,
    })
}

/// Total distance of every full tour (each city exactly once). Tours that
/// would need a leg with no route are skipped.
fn tour_lengths(routes: &[Route]) -> Vec<u64> {
    let mut distances: HashMap<(&str, &str), u64> = HashMap::new();
    let mut cities: BTreeSet<&str> = BTreeSet::new();
    for route in routes {
        distances.insert((route.from.as_str(), route.to.as_str()), route.distance);
        distances.insert((route.to.as_str(), route.from.as_str()), route.distance);
        cities.insert(route.from.as_str());
        cities.insert(route.to.as_str());
    }

    cities
        .iter()
        .permutations(cities.len())
        .filter_map(|order| {
            order
                .windows(2)
                .map(|leg| distances.get(&(*leg[0], *leg[1])).copied())
                .sum::<Option<u64>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "London to Dublin = 464\n\
                           London to Belfast = 518\n\
                           Dublin to Belfast = 141\n";

    #[test]
    fn shortest_and_longest_match_example() {
        let solution = solve(EXAMPLE).expect("solve");
        assert_eq!(solution.part1, "605");
        assert_eq!(solution.part2.as_deref(), Some("982"));
    }

    #[test]
    fn routes_are_undirected() {
        let routes = parse_routes("A to B = 7\n").expect("parse");
        assert_eq!(tour_lengths(&routes), vec![7, 7]);
    }

    #[test]
    fn malformed_route_is_rejected() {
        assert!(solve("London towards Dublin = 464\n").is_err());
    }
}
