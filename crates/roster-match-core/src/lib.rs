//! # Roster Match Core
//!
//! Pure, synchronous logic for Roster Match: employee record models, query
//! hint extraction, scoring and ranking, and the exact-match directory
//! filter.
//!
//! This crate has no async runtime, no filesystem or network I/O and no
//! global state. Callers pass an explicit [`roster::Roster`] snapshot (or a
//! record slice) into every entry point.
//!
//! ```rust
//! use roster_match_core::models::EmployeeRecord;
//! use roster_match_core::roster::Roster;
//!
//! let roster = Roster::new(vec![EmployeeRecord {
//!     name: "Ana".into(),
//!     skills: vec!["Python".into()],
//!     experience_years: 4,
//!     ..Default::default()
//! }]);
//! let (hints, outcome) = roster.rank("python, 3+ years", 5);
//! assert_eq!(hints.min_exp, Some(3));
//! assert_eq!(outcome.results.len(), 1);
//! ```

pub mod filter;
pub mod hints;
pub mod models;
pub mod rank;
pub mod roster;
