//! Deterministic, pure logic for the light-grid engine.
//!
//! Core modules must be free of I/O side effects. They consume already-parsed
//! commands, operate on in-memory grids, and return deterministic outputs
//! suitable for tests.

pub mod command;
pub mod engine;
pub mod grid;
pub mod semantics;
