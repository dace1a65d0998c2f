//! Day 6: Probably a Fire Hazard.
//!
//! Thin shell over the grid engine: parse the command document once, then
//! run it under binary semantics (how many lights are lit) and counter
//! semantics (total brightness), each on its own fresh grid.

use anyhow::{Context, Result};
use tracing::debug;

use super::Solution;
use crate::core::command::Mode;
use crate::core::engine::Engine;
use crate::io::commands::parse_commands;
use crate::io::config::SolverConfig;

pub fn solve(input: &str, config: &SolverConfig) -> Result<Solution> {
    let commands = parse_commands(input).context("parse light grid commands")?;
    debug!(
        commands = commands.len(),
        height = config.grid.height,
        width = config.grid.width,
        "running light grid"
    );

    let engine = Engine::new(config.grid.height, config.grid.width);
    let lit = engine.run(&commands, Mode::Binary)?;
    let brightness = engine.run(&commands, Mode::Counter)?;
    Ok(Solution::two(6, lit, brightness))
}
