//! # Roster Match
//!
//! **Free-text staffing queries over an employee roster.**
//!
//! Ask for "a python developer with 3+ years in retail, available" and get
//! back the best-matching employee profiles with a short written summary.
//! Matching is a deterministic heuristic: hints (skills, minimum experience,
//! domain, availability) are pulled from the query and each profile is
//! scored against them.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────────────┐
//! │ employees    │──▶│  Roster (immutable, Arc)  │
//! │ .json        │   └────────────┬─────────────┘
//! └──────────────┘                │
//!                   ┌─────────────┴─────────────┐
//!                   ▼                           ▼
//!             ┌──────────┐               ┌──────────┐
//!             │   CLI    │               │   HTTP   │
//!             │ (roster) │               │  (axum)  │
//!             └──────────┘               └──────────┘
//! ```
//!
//! The scoring logic lives in the `roster-match-core` crate; this crate adds
//! configuration, dataset loading, the HTTP server, and the CLI.
//!
//! ## Quick Start
//!
//! ```bash
//! roster chat "react developer, 4 years, available"
//! roster hints "c++ engineer with 5+ yrs in fintech"
//! roster search --skill python --min-experience 3
//! roster serve
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`dataset`] | Employee dataset loading |
//! | [`chat`] | Free-text query entry points |
//! | [`directory`] | Exact-match directory search |
//! | [`server`] | HTTP server |
//! | [`logging`] | Tracing subscriber setup |

pub mod chat;
pub mod config;
pub mod dataset;
pub mod directory;
pub mod logging;
pub mod server;
