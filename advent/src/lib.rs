//! Advent of Code 2015 puzzle solvers.
//!
//! Most days are linear scans, closed-form arithmetic, or regex-based
//! parsing. The engineering centerpiece is the day-6 light grid: an ordered
//! sequence of rectangle-scoped commands applied to a dense mutable grid
//! under one of two update semantics, then aggregated. The architecture
//! enforces a strict separation:
//!
//! - **[`core`]**: the grid engine — pure, deterministic logic with no I/O,
//!   fully testable in isolation.
//! - **[`io`]**: side-effecting and text-format concerns (input files,
//!   command-grammar parsing, TOML config).
//! - **[`days`]**: one solver per puzzle day, coordinating core logic with
//!   I/O-free input text.

pub mod core;
pub mod days;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
