//! Day 2: I Was Told There Would Be No Math.
//!
//! Presents are `LxWxH` boxes; part one totals the wrapping paper, part
//! two the ribbon.

use anyhow::{Context, Result, anyhow};

use super::Solution;

pub fn solve(input: &str) -> Result<Solution> {
    let presents = parse_presents(input)?;
    let paper: u64 = presents.iter().map(Present::wrapping_paper).sum();
    let ribbon: u64 = presents.iter().map(Present::ribbon).sum();
    Ok(Solution::two(2, paper, ribbon))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Present {
    length: u64,
    width: u64,
    height: u64,
}

impl Present {
    /// Surface area plus slack (the area of the smallest side).
    fn wrapping_paper(&self) -> u64 {
        let sides = [
            self.length * self.width,
            self.width * self.height,
            self.height * self.length,
        ];
        let surface: u64 = sides.iter().map(|side| 2 * side).sum();
        let slack = sides.into_iter().min().unwrap_or(0);
        surface + slack
    }

    /// Smallest perimeter around the box plus a bow the size of the volume.
    fn ribbon(&self) -> u64 {
        let mut dims = [self.length, self.width, self.height];
        dims.sort_unstable();
        2 * (dims[0] + dims[1]) + self.length * self.width * self.height
    }
}

fn parse_presents(input: &str) -> Result<Vec<Present>> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(index, line)| {
            parse_present(line).with_context(|| format!("line {}", index + 1))
        })
        .collect()
}

fn parse_present(line: &str) -> Result<Present> {
    let mut dims = line.trim().splitn(3, 'x');
    let mut next = |name: &str| -> Result<u64> {
        dims.next()
            .ok_or_else(|| anyhow!("missing {name} in '{}'", line.trim()))?
            .parse()
            .with_context(|| format!("{name} in '{}'", line.trim()))
    };
    Ok(Present {
        length: next("length")?,
        width: next("width")?,
        height: next("height")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_paper_matches_examples() {
        assert_eq!(parse_present("2x3x4").expect("parse").wrapping_paper(), 58);
        assert_eq!(parse_present("1x1x10").expect("parse").wrapping_paper(), 43);
    }

    #[test]
    fn ribbon_matches_examples() {
        assert_eq!(parse_present("2x3x4").expect("parse").ribbon(), 34);
        assert_eq!(parse_present("1x1x10").expect("parse").ribbon(), 14);
    }

    #[test]
    fn totals_sum_over_all_presents() {
        let solution = solve("2x3x4\n1x1x10\n").expect("solve");
        assert_eq!(solution.part1, "101");
        assert_eq!(solution.part2.as_deref(), Some("48"));
    }

    #[test]
    fn malformed_line_is_reported_with_its_number() {
        let err = solve("2x3x4\n2x3\n").expect_err("short line");
        assert!(format!("{err:#}").contains("line 2"));
    }
}
