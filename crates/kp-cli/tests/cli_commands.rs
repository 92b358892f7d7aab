//! End-to-end tests for the `kp` command-line interface.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn kp() -> Command {
    let mut cmd = Command::cargo_bin("kp").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_shows_the_kitchen() {
    kp().arg("play")
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("== Kitchen =="))
        .stdout(predicate::str::contains("1) Go south"))
        .stdout(predicate::str::contains("2) Make coffee"))
        .stdout(predicate::str::contains("Bag: No Items"));
}

#[test]
fn play_through_to_the_win() {
    kp().arg("play")
        .write_stdin("1\n4\n1\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The book tells you"))
        .stdout(predicate::str::contains("== Outside =="))
        .stdout(predicate::str::contains("YOU WIN!!"))
        .stdout(predicate::str::contains("1) Start again"));
}

#[test]
fn play_coffee_in_the_bag() {
    kp().arg("play")
        .write_stdin("make coffee\ncontinue\nb1\n1\n1\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Select an item to use:"))
        .stdout(predicate::str::contains("b1) Mug Of Coffee"))
        .stdout(predicate::str::contains("The Coffee is delicious."))
        .stdout(predicate::str::contains("hard to drop off"));
}

#[test]
fn play_reports_bad_input_and_continues() {
    kp().arg("play")
        .write_stdin("9\nb1\ndance\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid action selection: 9"))
        .stdout(predicate::str::contains("invalid bag selection: 1"))
        .stdout(predicate::str::contains("No action called \"dance\""))
        .stdout(predicate::str::contains("You have made a nice hot mug of coffee."));
}

#[test]
fn play_logs_rejected_selections() {
    kp().arg("play")
        .env_remove("RUST_LOG")
        .write_stdin("9\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "selection rejected: invalid action selection: 9",
        ));
}

#[test]
fn play_with_custom_prompts() {
    kp().args([
        "play",
        "--action-prompt",
        "What now?",
        "--bag-prompt",
        "Use what?",
        "--empty-bag",
        "(nothing)",
    ])
    .write_stdin("make coffee\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("What now?"))
    .stdout(predicate::str::contains("Bag: (nothing)"))
    .stdout(predicate::str::contains("Use what?"))
    .stdout(predicate::str::contains("Choose an action:").not());
}

#[test]
fn play_from_other_start() {
    kp().args(["play", "--start", "bedroom"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("== Bedroom =="));
}

#[test]
fn play_unknown_start_fails() {
    kp().args(["play", "--start", "attic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown state: \"attic\""));
}

#[test]
fn help_describes_the_game() {
    kp().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Kaffeepause, a very small text adventure",
        ));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes() {
    kp().arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"))
        .stdout(predicate::str::contains("8 states, 3 locations"));
}

#[test]
fn check_verbose_logs_issues() {
    kp().args(["-v", "check", "--start", "attic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("checked story"));
}

#[test]
fn check_unknown_start_fails() {
    kp().args(["check", "--start", "attic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("starting state \"attic\" is not defined"))
        .stderr(predicate::str::contains("1 error, 0 warnings"));
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn list_all_states() {
    kp().arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("makeCoffee"))
        .stdout(predicate::str::contains("Bedroom"))
        .stdout(predicate::str::contains("8 states"))
        .stdout(predicate::str::contains("\u{2014}").not());
}

#[test]
fn list_locations() {
    kp().args(["list", "--locations"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Outside"))
        .stdout(predicate::str::contains("makeCoffee").not())
        .stdout(predicate::str::contains("3 states"));
}

// ---------------------------------------------------------------------------
// graph
// ---------------------------------------------------------------------------

#[test]
fn graph_full() {
    kp().arg("graph")
        .assert()
        .success()
        .stdout(predicate::str::contains("[kitchen] --> Go south --> [bedroom]"))
        .stdout(predicate::str::contains("[outside] --> Start again --> [<starting state>]"))
        .stdout(predicate::str::contains("[drinkCoffee] sets hasDrunkCoffee = true"));
}

#[test]
fn graph_focus() {
    kp().args(["graph", "--focus", "drinkCoffee"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph for: drinkCoffee"))
        .stdout(predicate::str::contains("Mug Of Coffee (bag)"))
        .stdout(predicate::str::contains("[kitchen] -->").not());
}

#[test]
fn graph_focus_unknown_fails() {
    kp().args(["graph", "--focus", "attic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("state not found"));
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

#[test]
fn export_json_stdout() {
    kp().args(["export", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"start\": \"kitchen\""))
        .stdout(predicate::str::contains("\"current_location\""));
}

#[test]
fn export_markdown_to_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("story.md");

    kp().args(["export", "markdown", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("# Kaffeepause"));
    assert!(content.contains("### Bedroom (`bedroom`)"));
}

#[test]
fn export_unknown_format_fails() {
    kp().args(["export", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format"));
}
