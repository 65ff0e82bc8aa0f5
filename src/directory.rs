//! Exact-match directory search (`roster search`, `GET /employees/search`).

use anyhow::Result;

pub use roster_match_core::filter::DirectoryFilter;
use roster_match_core::filter::filter_records;
use roster_match_core::models::EmployeeRecord;
use roster_match_core::roster::Roster;

/// Records matching `filter`, cloned for serialization.
pub fn search_directory(roster: &Roster, filter: &DirectoryFilter) -> Vec<EmployeeRecord> {
    let found: Vec<EmployeeRecord> = filter_records(roster.records(), filter)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(
        skills = ?filter.skills,
        min_experience = ?filter.min_experience,
        availability = ?filter.availability,
        matches = found.len(),
        "directory search"
    );

    found
}

/// CLI entry point: prints one line per match, or JSON.
pub fn run_directory_search(roster: &Roster, filter: &DirectoryFilter, json: bool) -> Result<()> {
    let found = search_directory(roster, filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    if found.is_empty() {
        println!("No matching employees.");
        return Ok(());
    }

    for (i, rec) in found.iter().enumerate() {
        println!(
            "{}. {} · {} yrs · {}",
            i + 1,
            rec.name,
            rec.experience_years,
            rec.availability
        );
        println!("    skills: {}", rec.skills.join(", "));
        if !rec.projects.is_empty() {
            println!("    projects: {}", rec.projects.join(", "));
        }
    }

    Ok(())
}
