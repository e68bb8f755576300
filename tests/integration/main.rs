//! Integration tests against the fixture season table.

mod dashboard;
mod prediction;

use std::path::PathBuf;

use matchup::data::Dataset;

/// Path to the fixture CSV shipped with the tests.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/teams.csv")
}

pub fn fixture_dataset() -> Dataset {
    Dataset::load(fixture_path()).expect("fixture dataset loads")
}
