//! Day solvers against the published puzzle examples.

use advent::days::{Solution, solve};
use advent::io::config::SolverConfig;

fn answers(day: u8, input: &str) -> Solution {
    solve(day, input, &SolverConfig::default()).expect("solve")
}

#[test]
fn day01_floor_and_basement_entry() {
    let solution = answers(1, "()())\n");
    assert_eq!(solution.part1, "-1");
    assert_eq!(solution.part2.as_deref(), Some("5"));
}

#[test]
fn day02_paper_and_ribbon_totals() {
    let solution = answers(2, "2x3x4\n1x1x10\n");
    assert_eq!(solution.part1, "101");
    assert_eq!(solution.part2.as_deref(), Some("48"));
}

#[test]
fn day03_houses_for_one_and_two_agents() {
    let solution = answers(3, "^>v<\n");
    assert_eq!(solution.part1, "4");
    assert_eq!(solution.part2.as_deref(), Some("3"));
}

#[test]
fn day05_nice_string_counts() {
    let input = "ugknbfddgicrmopn\njchzalrnumimnmhp\nxxyxx\nieodomkazucvgmuy\n";
    let solution = answers(5, input);
    assert_eq!(solution.part1, "1");
    assert_eq!(solution.part2.as_deref(), Some("1"));
}

#[test]
fn day06_binary_and_counter_totals() {
    let input = "turn on 0,0 through 999,999\n\
                 toggle 0,0 through 999,0\n\
                 turn off 499,499 through 500,500\n";
    let solution = answers(6, input);
    assert_eq!(solution.part1, "998996");
    assert_eq!(solution.part2.as_deref(), Some("1001996"));
}

#[test]
fn day09_shortest_and_longest_tour() {
    let input = "London to Dublin = 464\n\
                 London to Belfast = 518\n\
                 Dublin to Belfast = 141\n";
    let solution = answers(9, input);
    assert_eq!(solution.part1, "605");
    assert_eq!(solution.part2.as_deref(), Some("982"));
}

#[test]
fn day10_look_and_say_lengths() {
    // "1" doubles in a predictable way early on; 40 and 50 rounds stay fast.
    let solution = answers(10, "1\n");
    assert_eq!(solution.part1, "82350");
    assert_eq!(solution.part2.as_deref(), Some("1166642"));
}

#[test]
fn day16_exact_and_ranged_aunt() {
    let input = "Sue 1: cats: 7, goldfish: 5\n\
                 Sue 2: children: 3, cars: 2\n\
                 Sue 3: cats: 8, pomeranians: 2\n";
    let solution = answers(16, input);
    assert_eq!(solution.part1, "1");
    assert_eq!(solution.part2.as_deref(), Some("2"));
}

#[test]
fn day25_code_from_instruction_text() {
    let input = "To continue, please consult the code grid in the manual.  \
                 Enter the code at row 4, column 3.\n";
    let solution = answers(25, input);
    assert_eq!(solution.part1, "21345942");
    assert_eq!(solution.part2, None);
}

#[test]
fn uncovered_day_is_an_error() {
    let err = solve(11, "", &SolverConfig::default()).expect_err("day 11");
    assert!(err.to_string().contains("no solver for day 11"));
}
