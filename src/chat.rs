//! Free-text staffing queries.
//!
//! This module provides the application-level entry points for chat. The
//! hint extraction and ranking live in `roster-match-core` and operate on an
//! explicit [`Roster`]. This wrapper builds the response shape shared by the
//! CLI and `POST /chat`, logs the request, and formats CLI output.

use anyhow::Result;
use serde::Serialize;

pub use roster_match_core::hints::QueryHints;
pub use roster_match_core::rank::{RankOutcome, ScoringScheme};
use roster_match_core::models::RankedResult;
use roster_match_core::roster::Roster;

/// Response body for a chat query, as serialized by `POST /chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    /// The query exactly as received.
    pub query: String,
    /// Ranked matches, best first.
    pub candidates: Vec<RankedResult>,
    /// Human-readable summary of `candidates`.
    pub answer: String,
    /// Which scoring scheme produced `candidates`.
    pub scheme: ScoringScheme,
}

/// Core chat function returning the structured response.
///
/// Shared by `roster chat` (CLI) and `POST /chat` (HTTP). Never fails; an
/// unmatched query yields no candidates and an explanatory answer.
pub fn answer_query(roster: &Roster, query: &str, top_k: i64) -> ChatResponse {
    let (hints, outcome) = roster.rank(query, top_k);

    tracing::debug!(
        query,
        top_k,
        skills = ?hints.skills,
        min_exp = ?hints.min_exp,
        domain = ?hints.domain,
        availability = ?hints.availability,
        scheme = %outcome.scheme,
        candidates = outcome.results.len(),
        "ranked roster"
    );

    ChatResponse {
        query: query.to_string(),
        candidates: outcome.results,
        answer: outcome.summary,
        scheme: outcome.scheme,
    }
}

/// CLI entry point: prints the answer, or the full response as JSON.
pub fn run_chat(roster: &Roster, query: &str, top_k: i64, json: bool) -> Result<()> {
    let response = answer_query(roster, query, top_k);

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", response.answer);
    }

    Ok(())
}

/// CLI entry point for `roster hints`: prints extracted hints as JSON.
pub fn run_hints(roster: &Roster, query: &str) -> Result<()> {
    let hints = roster.hints(query);
    println!("{}", serde_json::to_string_pretty(&hints)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_match_core::models::EmployeeRecord;

    fn roster() -> Roster {
        Roster::new(vec![
            EmployeeRecord {
                name: "Ana".into(),
                skills: vec!["Python".into(), "AWS".into()],
                projects: vec!["Retail forecasting".into()],
                experience_years: 4,
                availability: "available".into(),
                ..Default::default()
            },
            EmployeeRecord {
                name: "Raj".into(),
                skills: vec!["Java".into()],
                projects: vec!["Payments gateway".into()],
                experience_years: 9,
                availability: "busy".into(),
                ..Default::default()
            },
        ])
    }

    #[test]
    fn test_answer_echoes_query() {
        let resp = answer_query(&roster(), "Python in retail", 5);
        assert_eq!(resp.query, "Python in retail");
        assert_eq!(resp.candidates.len(), 1);
        assert_eq!(resp.candidates[0].record.name, "Ana");
        assert!(resp.answer.contains("'Python in retail'"));
    }

    #[test]
    fn test_response_serializes_flat_candidates() {
        let resp = answer_query(&roster(), "java", 5);
        let v = serde_json::to_value(&resp).unwrap();
        assert_eq!(v["query"], "java");
        assert_eq!(v["candidates"][0]["name"], "Raj");
        assert!(v["candidates"][0]["match_score"].as_f64().unwrap() > 1.0);
        assert!(v["answer"].as_str().unwrap().contains("Raj"));
    }

    #[test]
    fn test_unmatched_query() {
        let resp = answer_query(&roster(), "xyzzy", 5);
        assert!(resp.candidates.is_empty());
        assert!(resp.answer.contains("couldn't find a strong match"));
        assert_eq!(resp.scheme, ScoringScheme::Fallback);
    }

    #[test]
    fn test_response_reports_scheme() {
        let primary = serde_json::to_value(answer_query(&roster(), "java", 5)).unwrap();
        assert_eq!(primary["scheme"], "primary");

        let fallback = serde_json::to_value(answer_query(&roster(), "paym", 5)).unwrap();
        assert_eq!(fallback["scheme"], "fallback");
        assert_eq!(fallback["candidates"][0]["name"], "Raj");
    }
}
