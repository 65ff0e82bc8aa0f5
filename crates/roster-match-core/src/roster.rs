//! Immutable roster snapshot.
//!
//! A [`Roster`] owns the loaded records together with the skill vocabulary
//! derived from them. It is built once and then only read, so it can be
//! shared across threads behind an `Arc` without locking.

use std::collections::HashSet;

use crate::hints::{self, QueryHints};
use crate::models::EmployeeRecord;
use crate::rank::{self, RankOutcome};

/// Every skill listed by any record, lower-cased.
pub fn skill_vocabulary(records: &[EmployeeRecord]) -> HashSet<String> {
    records
        .iter()
        .flat_map(|r| r.skills.iter().map(|s| s.to_lowercase()))
        .collect()
}

/// A fixed snapshot of employee records.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<EmployeeRecord>,
    vocabulary: HashSet<String>,
}

impl Roster {
    pub fn new(records: Vec<EmployeeRecord>) -> Self {
        let vocabulary = skill_vocabulary(&records);
        Self {
            records,
            vocabulary,
        }
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Lower-cased skill vocabulary of this snapshot.
    pub fn vocabulary(&self) -> &HashSet<String> {
        &self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Extract hints for `query` against this roster's vocabulary.
    pub fn hints(&self, query: &str) -> QueryHints {
        hints::extract(query, &self.vocabulary)
    }

    /// Extract hints and rank this roster in one step.
    pub fn rank(&self, query: &str, limit: i64) -> (QueryHints, RankOutcome) {
        let hints = self.hints(query);
        let outcome = rank::rank(&self.records, &hints, query, limit);
        (hints, outcome)
    }
}

impl From<Vec<EmployeeRecord>> for Roster {
    fn from(records: Vec<EmployeeRecord>) -> Self {
        Self::new(records)
    }
}
