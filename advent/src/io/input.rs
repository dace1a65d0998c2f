//! Puzzle input reading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read a puzzle input file into memory.
pub fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}
