//! I/O and text-format helpers for the solvers.

pub mod commands;
pub mod config;
pub mod input;
