//! Roster dataset loading.
//!
//! The dataset is a JSON document with a top-level `employees` array. It is
//! read once at startup and turned into an immutable [`Roster`]; nothing
//! writes to it afterwards.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use roster_match_core::models::EmployeeRecord;
use roster_match_core::roster::Roster;

use crate::config::Config;

#[derive(Deserialize)]
struct DatasetFile {
    employees: Vec<EmployeeRecord>,
}

/// Parse a dataset from JSON text.
pub fn parse_roster(json: &str) -> Result<Roster> {
    let file: DatasetFile =
        serde_json::from_str(json).with_context(|| "Failed to parse employee dataset")?;
    Ok(Roster::new(file.employees))
}

/// Read and parse the dataset at `path`.
pub fn load_roster(path: &Path) -> Result<Roster> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read employee dataset: {}", path.display()))?;

    let roster = parse_roster(&content)
        .with_context(|| format!("Invalid employee dataset: {}", path.display()))?;

    if roster.is_empty() {
        tracing::warn!(path = %path.display(), "employee dataset is empty");
    }
    tracing::info!(
        path = %path.display(),
        employees = roster.len(),
        skills = roster.vocabulary().len(),
        "loaded employee dataset"
    );

    Ok(roster)
}

/// Load the dataset named by `[data].path`.
pub fn load_from_config(config: &Config) -> Result<Roster> {
    load_roster(&config.data.path)
}
