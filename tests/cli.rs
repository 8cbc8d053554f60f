use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::{contains, is_empty};
use tempfile::TempDir;

fn movies() -> Command {
    Command::cargo_bin("movies").unwrap()
}

// `movies -V` should print the version
#[test]
fn cli_version() {
    movies()
        .args(["-V"])
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn cli_exit_prints_menu_then_goodbye() {
    movies()
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout(contains("Welcome to the Movie Collection App."))
        .stdout(contains("Exiting the program..."));
}

#[test]
fn cli_print_all_lists_default_seed() {
    movies()
        .write_stdin("print-all\nx\n")
        .assert()
        .success()
        .stdout(contains("Madagascar"))
        .stdout(contains("Harry Potter and the Sorcerer's Stone"));
}

#[test]
fn cli_empty_flag_skips_seed() {
    movies()
        .arg("--empty")
        .write_stdin("print-all\nx\n")
        .assert()
        .success()
        .stdout(contains("There are currently no movies in the collection"));
}

#[test]
fn cli_add_then_details() {
    movies()
        .arg("--empty")
        .write_stdin("add\nUp\nAnimation\n2009-05-29\n96\nprint-details\nUp\nx\n")
        .assert()
        .success()
        .stdout(contains("Up added successfully!"))
        .stdout(contains(
            "Name: Up, Category: Animation, Release Date: 2009-05-29, Run Time: 96 minutes",
        ));
}

#[test]
fn cli_invalid_argument_terminates() {
    movies()
        .write_stdin("add\nUp\n\n2009-05-29\n96\nx\n")
        .assert()
        .failure()
        .stdout(contains("The category cannot be empty"))
        .stdout(contains("Exiting the program...").not());
}

#[test]
fn cli_seed_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("seed.json");
    fs::write(
        &path,
        r#"[{"name":"Heat","category":"Crime","release_date":"1995-12-15","runtime":"170"}]"#,
    )
    .unwrap();

    movies()
        .arg("--seed-file")
        .arg(&path)
        .write_stdin("print-category\ncrime\nprint-details\nMadagascar\nx\n")
        .assert()
        .success()
        .stdout(contains("Heat"))
        .stdout(contains("Movie not found: Madagascar"));
}

#[test]
fn cli_seed_file_with_empty_category_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("seed.json");
    fs::write(
        &path,
        r#"[{"name":"Heat","category":"","release_date":"1995-12-15","runtime":"170"}]"#,
    )
    .unwrap();

    movies()
        .arg("--seed-file")
        .arg(&path)
        .write_stdin("x\n")
        .assert()
        .failure()
        .stdout(contains("The category cannot be empty"))
        .stdout(contains("Welcome to the Movie Collection App.").not());
}

#[test]
fn cli_missing_seed_file_is_unexpected_error() {
    let temp_dir = TempDir::new().unwrap();
    movies()
        .arg("--seed-file")
        .arg(temp_dir.path().join("missing.json"))
        .write_stdin("x\n")
        .assert()
        .failure()
        .stdout(contains("An unexpected error occurred. Please try again later."))
        .stderr(contains("IO error"));
}

#[test]
fn cli_seed_file_conflicts_with_empty() {
    movies()
        .args(["--empty", "--seed-file", "seed.json"])
        .assert()
        .failure()
        .stdout(is_empty());
}
