//! Day 3: Perfectly Spherical Houses in a Vacuum.
//!
//! Agents walk `^v<>` moves from a shared origin, delivering to every house
//! they pass. Part one uses one agent, part two splits the moves between
//! two agents taking turns.

use std::collections::HashSet;

use anyhow::{Result, bail};

use super::Solution;

pub fn solve(input: &str) -> Result<Solution> {
    let moves = input.trim();
    Ok(Solution::two(
        3,
        visited_houses(moves, 1)?,
        visited_houses(moves, 2)?,
    ))
}

/// Count distinct houses visited when `agent_count` agents take the moves
/// in turn, all starting at the origin (which always counts as visited).
fn visited_houses(moves: &str, agent_count: usize) -> Result<usize> {
    let mut visited = HashSet::from([(0i64, 0i64)]);
    let mut positions = vec![(0i64, 0i64); agent_count];

    for (index, ch) in moves.chars().enumerate() {
        let (dx, dy) = match ch {
            '^' => (0, 1),
            'v' => (0, -1),
            '>' => (1, 0),
            '<' => (-1, 0),
            _ => bail!("invalid direction '{ch}' at position {}", index + 1),
        };
        let position = &mut positions[index % agent_count];
        position.0 += dx;
        position.1 += dy;
        visited.insert(*position);
    }

    Ok(visited.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_agent_matches_examples() {
        assert_eq!(visited_houses(">", 1).expect("houses"), 2);
        assert_eq!(visited_houses("^>v<", 1).expect("houses"), 4);
        assert_eq!(visited_houses("^v^v^v^v^v", 1).expect("houses"), 2);
    }

    #[test]
    fn two_agents_match_examples() {
        assert_eq!(visited_houses("^v", 2).expect("houses"), 3);
        assert_eq!(visited_houses("^>v<", 2).expect("houses"), 3);
        assert_eq!(visited_houses("^v^v^v^v^v", 2).expect("houses"), 11);
    }

    #[test]
    fn invalid_direction_is_rejected() {
        assert!(visited_houses("^x", 1).is_err());
    }
}
