//! Test-only helpers for constructing commands and input files.

use std::path::PathBuf;

use crate::core::command::{Command, Kind, Rect};

/// Inclusive rectangle from literal coordinates.
pub fn rect(r0: usize, c0: usize, r1: usize, c1: usize) -> Rect {
    Rect::new(r0, c0, r1, c1).expect("valid test rectangle")
}

/// `turn on` command over an inclusive rectangle.
pub fn on(r0: usize, c0: usize, r1: usize, c1: usize) -> Command {
    Command {
        kind: Kind::TurnOn,
        rect: rect(r0, c0, r1, c1),
    }
}

/// `turn off` command over an inclusive rectangle.
pub fn off(r0: usize, c0: usize, r1: usize, c1: usize) -> Command {
    Command {
        kind: Kind::TurnOff,
        rect: rect(r0, c0, r1, c1),
    }
}

/// `toggle` command over an inclusive rectangle.
pub fn toggle(r0: usize, c0: usize, r1: usize, c1: usize) -> Command {
    Command {
        kind: Kind::Toggle,
        rect: rect(r0, c0, r1, c1),
    }
}

/// Write `contents` as an input file in a fresh temp dir.
///
/// Returns the dir guard alongside the path; dropping the guard deletes
/// the file.
pub fn write_input(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("input.txt");
    std::fs::write(&path, contents).expect("write input");
    (dir, path)
}
