//! Contract types shared by the grid engine and its collaborators.
//!
//! These types define the stable boundary between the external command
//! parser and the engine. They carry no grid state and stay deterministic:
//! a parsed command sequence means the same thing on every run.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rectangle of grid cells, inclusive on both corners.
///
/// Construction enforces `r0 <= r1` and `c0 <= c1`. Whether the rectangle
/// fits a particular grid is a separate question answered by the engine,
/// which knows the grid dimensions (see [`crate::core::engine`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    r0: usize,
    c0: usize,
    r1: usize,
    c1: usize,
}

/// Rejected rectangle coordinates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RectError {
    #[error("row range is inverted: {0} > {1}")]
    InvertedRows(usize, usize),
    #[error("column range is inverted: {0} > {1}")]
    InvertedColumns(usize, usize),
}

impl Rect {
    /// Build a rectangle from `(r0,c0)` through `(r1,c1)`, both inclusive.
    pub fn new(r0: usize, c0: usize, r1: usize, c1: usize) -> Result<Self, RectError> {
        if r0 > r1 {
            return Err(RectError::InvertedRows(r0, r1));
        }
        if c0 > c1 {
            return Err(RectError::InvertedColumns(c0, c1));
        }
        Ok(Self { r0, c0, r1, c1 })
    }

    pub fn r0(&self) -> usize {
        self.r0
    }

    pub fn c0(&self) -> usize {
        self.c0
    }

    pub fn r1(&self) -> usize {
        self.r1
    }

    pub fn c1(&self) -> usize {
        self.c1
    }

    /// Number of cells covered, counting both inclusive bounds.
    pub fn area(&self) -> u64 {
        let rows = (self.r1 - self.r0 + 1) as u64;
        let cols = (self.c1 - self.c0 + 1) as u64;
        rows * cols
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{} through {},{}", self.r0, self.c0, self.r1, self.c1)
    }
}

/// The three command kinds of the light-grid grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    TurnOn,
    TurnOff,
    Toggle,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TurnOn => write!(f, "turn on"),
            Self::TurnOff => write!(f, "turn off"),
            Self::Toggle => write!(f, "toggle"),
        }
    }
}

/// Update semantics for one engine run.
///
/// Fixed for the lifetime of a run; the engine never mixes modes within a
/// single grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Cells are lights, always 0 or 1.
    Binary,
    /// Cells are brightness counters, 0 or above with no upper bound.
    Counter,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary => write!(f, "binary"),
            Self::Counter => write!(f, "counter"),
        }
    }
}

/// One rectangle-scoped operation. Immutable once constructed; command
/// order is significant because the transforms do not commute in general.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub kind: Kind,
    pub rect: Rect,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_accepts_single_cell() {
        let rect = Rect::new(5, 5, 5, 5).expect("single cell");
        assert_eq!(rect.area(), 1);
    }

    #[test]
    fn rect_rejects_inverted_rows() {
        assert_eq!(Rect::new(3, 0, 2, 9), Err(RectError::InvertedRows(3, 2)));
    }

    #[test]
    fn rect_rejects_inverted_columns() {
        assert_eq!(
            Rect::new(0, 7, 9, 6),
            Err(RectError::InvertedColumns(7, 6))
        );
    }

    #[test]
    fn rect_area_counts_inclusive_bounds() {
        let rect = Rect::new(499, 499, 500, 500).expect("rect");
        assert_eq!(rect.area(), 4);
    }

    #[test]
    fn command_displays_in_wire_grammar() {
        let command = Command {
            kind: Kind::TurnOff,
            rect: Rect::new(0, 0, 999, 999).expect("rect"),
        };
        assert_eq!(command.to_string(), "turn off 0,0 through 999,999");
    }
}
