//! End-to-end grid engine scenarios: command text through the parser and
//! engine, under both modes.

use advent::core::command::Mode;
use advent::core::engine::{Engine, EngineError};
use advent::core::grid::Grid;
use advent::core::semantics;
use advent::io::commands::parse_commands;
use advent::test_support::rect;

fn run(input: &str, mode: Mode) -> u64 {
    let commands = parse_commands(input).expect("parse commands");
    Engine::new(1000, 1000)
        .run(&commands, mode)
        .expect("run commands")
}

#[test]
fn full_grid_turn_on_totals_one_million_in_both_modes() {
    let input = "turn on 0,0 through 999,999\n";
    assert_eq!(run(input, Mode::Binary), 1_000_000);
    assert_eq!(run(input, Mode::Counter), 1_000_000);
}

#[test]
fn double_toggle_of_first_column_cancels_in_binary_mode() {
    let input = "toggle 0,0 through 999,0\ntoggle 0,0 through 999,0\n";
    assert_eq!(run(input, Mode::Binary), 0);
}

#[test]
fn counter_floor_returns_single_lit_cell_to_zero() {
    let input = "turn on 0,0 through 0,0\nturn off 0,0 through 999,999\n";
    assert_eq!(run(input, Mode::Counter), 0);
}

#[test]
fn two_by_two_rectangle_is_inclusive_on_both_corners() {
    assert_eq!(run("turn on 499,499 through 500,500\n", Mode::Binary), 4);
}

/// The reference walkthrough: on everything, toggle the first column, off
/// the middle four.
#[test]
fn reference_sequence_under_both_modes() {
    let input = "turn on 0,0 through 999,999\n\
                 toggle 0,0 through 999,0\n\
                 turn off 499,499 through 500,500\n";
    assert_eq!(run(input, Mode::Binary), 1_000_000 - 1000 - 4);
    assert_eq!(run(input, Mode::Counter), 1_000_000 + 2000 - 4);
}

/// Turning on a rectangle sets every covered cell in binary mode and
/// increments it in counter mode, leaving the rest untouched.
#[test]
fn turn_on_affects_exactly_the_rectangle() {
    let target = rect(10, 20, 30, 40);
    for mode in [Mode::Binary, Mode::Counter] {
        let mut grid = Grid::new(100, 100);
        grid.apply(
            &target,
            semantics::transform(mode, advent::core::command::Kind::TurnOn),
        );
        for row in 0..100 {
            for col in 0..100 {
                let inside = (10..=30).contains(&row) && (20..=40).contains(&col);
                assert_eq!(grid.get(row, col), u32::from(inside), "({row},{col})");
            }
        }
    }
}

#[test]
fn out_of_bounds_command_aborts_with_position_and_command() {
    let input = "turn on 0,0 through 999,999\ntoggle 500,0 through 1000,0\n";
    let commands = parse_commands(input).expect("parse commands");
    let err = Engine::new(1000, 1000)
        .run(&commands, Mode::Binary)
        .expect_err("second rectangle exceeds the grid");
    assert_eq!(
        err,
        EngineError::InvalidRectangle {
            position: 2,
            command: commands[1],
            height: 1000,
            width: 1000,
        }
    );
    assert!(err.to_string().contains("toggle 500,0 through 1000,0"));
}

/// Counter cells never drop below zero no matter how many turn_offs pile up.
#[test]
fn counter_mode_floors_through_long_sequences() {
    let input = "turn off 0,0 through 9,9\n".repeat(50)
        + "turn on 3,3 through 3,3\n"
        + &"turn off 0,0 through 9,9\n".repeat(50);
    let commands = parse_commands(&input).expect("parse commands");
    let total = Engine::new(10, 10)
        .run(&commands, Mode::Counter)
        .expect("run");
    assert_eq!(total, 0);
}
