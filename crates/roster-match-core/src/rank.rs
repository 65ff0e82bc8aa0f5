//! Scoring and ranking engine.
//!
//! Scores every record against the extracted [`QueryHints`], keeps the
//! positive ones, sorts them and renders a plain-text summary.
//!
//! # Primary Scoring
//!
//! | Signal | Condition | Weight |
//! |--------|-----------|--------|
//! | Skill overlap | hint skill listed by the record | +1.0 each |
//! | Domain | hint domain inside any project description | +1.2 once |
//! | Experience | `experience_years >= min_exp` | +0.8 |
//! | Availability | record availability equals the hint | +0.5 |
//! | Literal echo | name, a skill or a project appears inside the query | +0.1 each |
//!
//! # Fallback Scoring
//!
//! Only when no record scores above zero, each record instead earns +0.5 per
//! distinct query token contained in any of its skills, projects or name.
//! The two schemes are never blended.
//!
//! # Ordering
//!
//! Results are sorted by score (desc). The sort is stable, so ties keep
//! dataset order. Scores are rounded to 3 decimals after sorting.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::Serialize;

use crate::hints::{tokenize, QueryHints};
use crate::models::{EmployeeRecord, RankedResult};

pub const SKILL_WEIGHT: f64 = 1.0;
pub const DOMAIN_WEIGHT: f64 = 1.2;
pub const EXPERIENCE_WEIGHT: f64 = 0.8;
pub const AVAILABILITY_WEIGHT: f64 = 0.5;
pub const ECHO_WEIGHT: f64 = 0.1;
pub const FALLBACK_TOKEN_WEIGHT: f64 = 0.5;

/// Which scoring pass produced a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringScheme {
    Primary,
    Fallback,
}

impl std::fmt::Display for ScoringScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoringScheme::Primary => f.write_str("primary"),
            ScoringScheme::Fallback => f.write_str("fallback"),
        }
    }
}

/// Ranked results plus the rendered summary for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankOutcome {
    pub results: Vec<RankedResult>,
    pub summary: String,
    pub scheme: ScoringScheme,
}

/// Rank `records` for `query`.
///
/// Returns at most `limit` results; a `limit` of zero or below yields an
/// empty list. Never fails.
pub fn rank(
    records: &[EmployeeRecord],
    hints: &QueryHints,
    query: &str,
    limit: i64,
) -> RankOutcome {
    let query_lower = query.to_lowercase();

    let mut scheme = ScoringScheme::Primary;
    let mut scored = collect_positive(records, |r| score_record(r, hints, &query_lower));

    if scored.is_empty() {
        scheme = ScoringScheme::Fallback;
        let tokens: BTreeSet<String> = tokenize(&query_lower).into_iter().collect();
        scored = collect_positive(records, |r| fallback_score(r, &tokens));
    }

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    let keep = usize::try_from(limit).unwrap_or(0);
    let results: Vec<RankedResult> = scored
        .into_iter()
        .take(keep)
        .map(|(score, record)| RankedResult::new(record.clone(), round_score(score)))
        .collect();

    let summary = render_summary(query, &results);

    RankOutcome {
        results,
        summary,
        scheme,
    }
}

fn collect_positive<'a, F>(
    records: &'a [EmployeeRecord],
    score: F,
) -> Vec<(f64, &'a EmployeeRecord)>
where
    F: Fn(&EmployeeRecord) -> f64,
{
    records
        .iter()
        .map(|r| (score(r), r))
        .filter(|(s, _)| *s > 0.0)
        .collect()
}

/// Primary score of one record. `query_lower` must already be lower-cased.
pub fn score_record(record: &EmployeeRecord, hints: &QueryHints, query_lower: &str) -> f64 {
    let mut score = 0.0;

    let skills: BTreeSet<String> = record.skills_lower().into_iter().collect();
    let overlap = hints.skills.intersection(&skills).count();
    score += overlap as f64 * SKILL_WEIGHT;

    if let Some(domain) = &hints.domain {
        if record
            .projects
            .iter()
            .any(|p| p.to_lowercase().contains(domain.as_str()))
        {
            score += DOMAIN_WEIGHT;
        }
    }

    if let Some(min_exp) = hints.min_exp {
        if record.experience_years >= min_exp {
            score += EXPERIENCE_WEIGHT;
        }
    }

    if let Some(availability) = &hints.availability {
        if record.availability.to_lowercase() == *availability {
            score += AVAILABILITY_WEIGHT;
        }
    }

    // Empty fields are substrings of everything; they never count as an echo.
    for field in record.text_fields() {
        if !field.is_empty() && query_lower.contains(&field.to_lowercase()) {
            score += ECHO_WEIGHT;
        }
    }

    score
}

/// Fallback score: +0.5 per distinct token found inside any text field.
pub fn fallback_score(record: &EmployeeRecord, tokens: &BTreeSet<String>) -> f64 {
    let fields: Vec<String> = record.text_fields().map(str::to_lowercase).collect();

    tokens
        .iter()
        .filter(|t| fields.iter().any(|f| f.contains(t.as_str())))
        .count() as f64
        * FALLBACK_TOKEN_WEIGHT
}

/// Round to 3 decimal places.
pub fn round_score(score: f64) -> f64 {
    (score * 1000.0).round() / 1000.0
}

/// Render a score the way the summary shows it: shortest form, but always
/// with a fractional part (`2.0`, `3.7`, `1.25`).
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.is_finite() {
        format!("{:.1}", score)
    } else {
        score.to_string()
    }
}

/// Render the human-readable answer for `results`.
pub fn render_summary(query: &str, results: &[RankedResult]) -> String {
    if results.is_empty() {
        return format!(
            "I couldn't find a strong match for: '{}'. Try adding specific skills or min experience.",
            query
        );
    }

    let mut lines = vec![format!(
        "Based on your query: '{}', here are the top {} candidates:",
        query,
        results.len()
    )];

    for (i, result) in results.iter().enumerate() {
        let r = &result.record;
        lines.push(format!(
            "{}. {} · {} yrs · {}\n   Skills: {} \n   Projects: {} \n   Match score: {}",
            i + 1,
            r.name,
            r.experience_years,
            r.availability,
            r.skills.join(", "),
            r.projects.join(", "),
            format_score(result.match_score)
        ));
    }

    lines.push(
        "\nWould you like me to check availability or schedule introductions?".to_string(),
    );
    lines.join("\n")
}
