use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::Result;

/// Records loaded into a fresh collection when none are supplied.
const DEFAULT_SEED: &str = r#"[
    {
        "name": "Harry Potter and the Sorcerer's Stone",
        "category": "Fantasy",
        "release_date": "2001-11-10",
        "runtime": "152"
    },
    {
        "name": "Madagascar",
        "category": "Animated comedy",
        "release_date": "2005-05-27",
        "runtime": "86"
    }
]"#;

/// One movie to load into a collection at start-up.
///
/// Fields are validated only when the entry is added to a collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedEntry {
    /// Movie name.
    pub name: String,
    /// Movie category.
    pub category: String,
    /// Release date, written as `YYYY-MM-DD`.
    pub release_date: NaiveDate,
    /// Runtime, free-form.
    pub runtime: String,
}

impl SeedEntry {
    /// Creates a seed entry.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        release_date: NaiveDate,
        runtime: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            release_date,
            runtime: runtime.into(),
        }
    }
}

/// Returns the two example movies every session starts with by default.
pub fn default_seed() -> Result<Vec<SeedEntry>> {
    Ok(serde_json::from_str(DEFAULT_SEED)?)
}

/// Reads a JSON array of seed entries from `path`.
pub fn load_seed(path: impl AsRef<Path>) -> Result<Vec<SeedEntry>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
