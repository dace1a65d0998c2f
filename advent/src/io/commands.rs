//! Parser for the light-grid command grammar.
//!
//! One command per line, inclusive coordinates:
//!
//! ```text
//! turn on <r0>,<c0> through <r1>,<c1>
//! turn off <r0>,<c0> through <r1>,<c1>
//! toggle <r0>,<c0> through <r1>,<c1>
//! ```
//!
//! Anything else is a parse failure and never reaches the engine.

use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow};
use regex::Regex;

use crate::core::command::{Command, Kind, Rect};

static COMMAND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(turn on|turn off|toggle) (\d+),(\d+) through (\d+),(\d+)$").unwrap()
});

/// Parse a single command line.
pub fn parse_command(line: &str) -> Result<Command> {
    let caps = COMMAND_RE
        .captures(line.trim())
        .ok_or_else(|| anyhow!("unrecognized command '{}'", line.trim()))?;

    let kind = match &caps[1] {
        "turn on" => Kind::TurnOn,
        "turn off" => Kind::TurnOff,
        _ => Kind::Toggle,
    };

    let coord = |i: usize| -> Result<usize> {
        caps[i]
            .parse()
            .with_context(|| format!("coordinate '{}' out of range", &caps[i]))
    };
    let rect = Rect::new(coord(2)?, coord(3)?, coord(4)?, coord(5)?)
        .with_context(|| format!("rectangle in '{}'", line.trim()))?;

    Ok(Command { kind, rect })
}

/// Parse a whole command document, one command per non-empty line.
///
/// Fails on the first malformed line, naming its 1-based line number.
pub fn parse_commands(input: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let command = parse_command(line).with_context(|| format!("line {}", index + 1))?;
        commands.push(command);
    }
    Ok(commands)
}
