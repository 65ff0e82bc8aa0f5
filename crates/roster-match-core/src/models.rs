//! Core data models shared by the hint extractor, the ranking engine and
//! the directory filter.
//!
//! Records arrive from hand-maintained JSON, so deserialization is lenient:
//! missing fields fall back to empty values and non-string values found
//! where text is expected are coerced to their textual JSON form. Fields the
//! core does not know about are kept in [`EmployeeRecord::extra`] and
//! serialized back unchanged.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// An employee profile as loaded from the roster dataset.
///
/// The core never mutates records; ranking produces [`RankedResult`] copies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Display name. Not guaranteed unique.
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// Skill labels, compared case-insensitively.
    #[serde(default, deserialize_with = "lenient_strings")]
    pub skills: Vec<String>,
    /// Free-text project descriptions.
    #[serde(default, deserialize_with = "lenient_strings")]
    pub projects: Vec<String>,
    #[serde(default, deserialize_with = "lenient_years")]
    pub experience_years: u32,
    /// Opaque availability token, usually `available`, `busy` or `notice`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub availability: String,
    /// Any other fields present in the source JSON (ids, emails, roles...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EmployeeRecord {
    /// Lower-cased skill labels, in record order.
    pub fn skills_lower(&self) -> Vec<String> {
        self.skills.iter().map(|s| s.to_lowercase()).collect()
    }

    /// Whether the record lists `skill`, ignoring case.
    pub fn has_skill(&self, skill: &str) -> bool {
        let wanted = skill.to_lowercase();
        self.skills.iter().any(|s| s.to_lowercase() == wanted)
    }

    /// Whether the record's availability equals `state`, ignoring case.
    pub fn is_availability(&self, state: &str) -> bool {
        self.availability.to_lowercase() == state.to_lowercase()
    }

    /// All free-text fields of the record: name, then skills, then projects.
    pub fn text_fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
            .chain(self.skills.iter().map(String::as_str))
            .chain(self.projects.iter().map(String::as_str))
    }
}

/// A record copy annotated with its relevance score.
///
/// Serializes as the flat record object plus a `match_score` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    #[serde(flatten)]
    pub record: EmployeeRecord,
    /// Additive relevance score rounded to 3 decimal places.
    pub match_score: f64,
}

impl RankedResult {
    /// Wrap `record` with `match_score`. A `match_score` carried over from the
    /// source data is dropped so the key appears once, holding the new score.
    pub fn new(mut record: EmployeeRecord, match_score: f64) -> Self {
        record.extra.remove("match_score");
        Self {
            record,
            match_score,
        }
    }
}

/// Textual form of a JSON value: strings verbatim, `null` empty, anything
/// else as compact JSON.
pub fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_of(&Value::deserialize(deserializer)?))
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::Array(items) => items
            .iter()
            .filter(|v| !v.is_null())
            .map(text_of)
            .collect(),
        scalar => vec![text_of(&scalar)],
    })
}

fn lenient_years<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let years = match Value::deserialize(deserializer)? {
        Value::Number(n) => match n.as_u64() {
            Some(v) => u32::try_from(v).unwrap_or(u32::MAX),
            None => n.as_f64().filter(|f| *f > 0.0).map_or(0, |f| f as u32),
        },
        Value::String(s) => s.trim().parse::<u32>().unwrap_or(0),
        _ => 0,
    };
    Ok(years)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_record_deserializes() {
        let rec: EmployeeRecord = serde_json::from_value(json!({
            "name": "Ana",
            "skills": ["Python", "AWS"],
            "projects": ["Retail forecasting"],
            "experience_years": 4,
            "availability": "available"
        }))
        .unwrap();
        assert_eq!(rec.name, "Ana");
        assert_eq!(rec.skills, vec!["Python", "AWS"]);
        assert_eq!(rec.experience_years, 4);
        assert!(rec.extra.is_empty());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let rec: EmployeeRecord = serde_json::from_value(json!({ "name": "Bo" })).unwrap();
        assert!(rec.skills.is_empty());
        assert!(rec.projects.is_empty());
        assert_eq!(rec.experience_years, 0);
        assert_eq!(rec.availability, "");
    }

    #[test]
    fn test_non_string_values_are_coerced() {
        let rec: EmployeeRecord = serde_json::from_value(json!({
            "name": 42,
            "skills": ["Go", 3, null],
            "projects": null,
            "experience_years": "7",
            "availability": true
        }))
        .unwrap();
        assert_eq!(rec.name, "42");
        assert_eq!(rec.skills, vec!["Go", "3"]);
        assert!(rec.projects.is_empty());
        assert_eq!(rec.experience_years, 7);
        assert_eq!(rec.availability, "true");
    }

    #[test]
    fn test_negative_and_fractional_years() {
        let neg: EmployeeRecord =
            serde_json::from_value(json!({ "experience_years": -2 })).unwrap();
        assert_eq!(neg.experience_years, 0);
        let frac: EmployeeRecord =
            serde_json::from_value(json!({ "experience_years": 3.9 })).unwrap();
        assert_eq!(frac.experience_years, 3);
    }

    #[test]
    fn test_extra_fields_round_trip_into_ranked_output() {
        let rec: EmployeeRecord = serde_json::from_value(json!({
            "id": 7,
            "name": "Ana",
            "email": "ana@example.com"
        }))
        .unwrap();
        assert_eq!(rec.extra.get("id"), Some(&json!(7)));

        let ranked = RankedResult {
            record: rec,
            match_score: 1.5,
        };
        let out = serde_json::to_value(&ranked).unwrap();
        assert_eq!(out["email"], "ana@example.com");
        assert_eq!(out["id"], 7);
        assert_eq!(out["match_score"], 1.5);
        assert_eq!(out["skills"], json!([]));
    }

    #[test]
    fn test_stale_match_score_is_replaced() {
        let rec: EmployeeRecord =
            serde_json::from_value(json!({ "name": "A", "match_score": 99 })).unwrap();
        assert_eq!(rec.extra.get("match_score"), Some(&json!(99)));

        let text = serde_json::to_string(&RankedResult::new(rec, 1.5)).unwrap();
        assert_eq!(text.matches("\"match_score\"").count(), 1);
        let out: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(out["match_score"], 1.5);
    }

    #[test]
    fn test_case_insensitive_helpers() {
        let rec = EmployeeRecord {
            skills: vec!["React".into()],
            availability: "Busy".into(),
            ..Default::default()
        };
        assert!(rec.has_skill("react"));
        assert!(!rec.has_skill("vue"));
        assert!(rec.is_availability("busy"));
        assert_eq!(rec.skills_lower(), vec!["react"]);
    }
}
