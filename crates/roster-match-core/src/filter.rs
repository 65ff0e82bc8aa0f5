//! Exact-match directory search.
//!
//! Unlike [`crate::rank`], the directory filter does no scoring: a record is
//! either in or out. All constraints are ANDed and dataset order is kept.

use crate::models::EmployeeRecord;

/// Constraints for a directory lookup. Empty values impose nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryFilter {
    /// Every listed skill must be held by the record (case-insensitive).
    pub skills: Vec<String>,
    /// Inclusive lower bound on `experience_years`.
    pub min_experience: Option<i64>,
    /// Case-insensitive availability match.
    pub availability: Option<String>,
}

impl DirectoryFilter {
    pub fn matches(&self, record: &EmployeeRecord) -> bool {
        if !self.skills.iter().all(|s| record.has_skill(s)) {
            return false;
        }

        if let Some(min) = self.min_experience {
            if i64::from(record.experience_years) < min {
                return false;
            }
        }

        match self.availability.as_deref() {
            Some(state) if !state.is_empty() => record.is_availability(state),
            _ => true,
        }
    }
}

/// Records matching `filter`, in dataset order.
pub fn filter_records<'a>(
    records: &'a [EmployeeRecord],
    filter: &DirectoryFilter,
) -> Vec<&'a EmployeeRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}
