//! # Folio CLI Profile Integration Tests
//!
//! File: cli/tests/profile.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Integration tests for the `folio profile` command group.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_profile_about() {
    folio_cmd()
        .args(["profile", "about"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nisal Perera"));
}

#[test]
fn test_profile_projects_tab_filter() {
    folio_cmd()
        .args(["profile", "projects", "--tab", "mobile-app"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("CampLanka iOS Mobile App")
                .and(predicate::str::contains("Square Game iOS App"))
                .and(predicate::str::contains("Weather Web App").not())
                .and(predicate::str::contains("Showing 2 of 15")),
        );
}

#[test]
fn test_profile_projects_unknown_tab() {
    folio_cmd()
        .args(["profile", "projects", "--tab", "games"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown project category 'games'"));
}

#[test]
fn test_profile_links() {
    folio_cmd()
        .args(["profile", "links"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://github.com/NisalMadura"));
}
