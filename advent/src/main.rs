//! Advent of Code 2015 solver CLI.
//!
//! Reads a puzzle input file, dispatches to the matching day solver, and
//! prints the answers to stdout (text by default, JSON on request).

use std::path::{Path, PathBuf};

use advent::days::{self, DAYS, Solution};
use advent::io::config::load_config;
use advent::io::input::read_input;
use advent::logging;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser)]
#[command(name = "advent", version, about = "Advent of Code 2015 solvers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve one day against a puzzle input file.
    Run {
        /// Puzzle day to solve.
        #[arg(short, long)]
        day: u8,
        /// Path to the puzzle input.
        #[arg(short, long)]
        input: PathBuf,
        /// Print the solution as a JSON object instead of text.
        #[arg(long)]
        json: bool,
        /// Path to the solver config (grid dimensions).
        #[arg(long, default_value = "advent.toml")]
        config: PathBuf,
    },
    /// List the days that have a solver.
    Days,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            day,
            input,
            json,
            config,
        } => cmd_run(day, &input, json, &config),
        Command::Days => cmd_days(),
    }
}

fn cmd_run(day: u8, input: &Path, json: bool, config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let text = read_input(input)?;
    debug!(day, input = %input.display(), "solving");

    let solution = days::solve(day, &text, &config).with_context(|| format!("solve day {day}"))?;
    if json {
        let rendered = serde_json::to_string_pretty(&solution).context("serialize solution")?;
        println!("{rendered}");
    } else {
        print_solution(&solution);
    }
    Ok(())
}

fn print_solution(solution: &Solution) {
    println!("Part 1: {}", solution.part1);
    if let Some(part2) = &solution.part2 {
        println!("Part 2: {part2}");
    }
}

fn cmd_days() -> Result<()> {
    for day in DAYS {
        println!("{day}");
    }
    Ok(())
}
