//! Query hint extraction.
//!
//! Turns a free-text query such as `"python developer with 3+ years in
//! retail, available"` into a structured [`QueryHints`]. Extraction never
//! fails: an unrecognizable query yields empty hints.
//!
//! # Algorithm
//!
//! 1. Lower-case the query.
//! 2. The first integer followed (optionally through `+` and whitespace) by
//!    `years`, `yrs` or `year` becomes `min_exp`.
//! 3. Tokenize into runs of ASCII letters, `+` and `#`; tokens found in the
//!    dataset's skill vocabulary become skill hints.
//! 4. The first entry of [`DOMAIN_KEYWORDS`] contained in the query (list
//!    order, not query order) becomes the domain.
//! 5. `available`, `busy` and `notice` are checked in that order and each
//!    hit overwrites the previous one, so `notice` wins over `busy`, which
//!    wins over `available`.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

/// Domain keywords, in priority order.
pub const DOMAIN_KEYWORDS: &[&str] = &[
    "healthcare",
    "fintech",
    "e-commerce",
    "edtech",
    "retail",
    "logistics",
    "ai",
    "cv",
    "nlp",
    "ml",
];

/// Availability states, in ascending priority.
pub const AVAILABILITY_STATES: &[&str] = &["available", "busy", "notice"];

const EXPERIENCE_UNITS: &[&str] = &["years", "yrs", "year"];

/// Structured signals extracted from one query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryHints {
    /// Lower-cased query tokens that are known dataset skills.
    pub skills: BTreeSet<String>,
    /// Minimum years of experience requested.
    pub min_exp: Option<u32>,
    /// At most one keyword from [`DOMAIN_KEYWORDS`].
    pub domain: Option<String>,
    /// One of [`AVAILABILITY_STATES`].
    pub availability: Option<String>,
}

impl QueryHints {
    /// True when no hint of any kind was extracted.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
            && self.min_exp.is_none()
            && self.domain.is_none()
            && self.availability.is_none()
    }
}

/// Extract hints from `query`.
///
/// `vocabulary` holds every skill of the current dataset, lower-cased (see
/// [`crate::roster::skill_vocabulary`]). A token only becomes a skill hint
/// when some record lists exactly that skill.
pub fn extract(query: &str, vocabulary: &HashSet<String>) -> QueryHints {
    let lowered = query.to_lowercase();

    let skills = tokenize(&lowered)
        .into_iter()
        .filter(|t| vocabulary.contains(t))
        .collect();

    QueryHints {
        skills,
        min_exp: parse_min_experience(&lowered),
        domain: detect_domain(&lowered).map(str::to_string),
        availability: detect_availability(&lowered).map(str::to_string),
    }
}

/// Split `text` into maximal runs of ASCII letters, `+` and `#`.
///
/// Everything else separates tokens, so `"c++, c# & go"` yields
/// `["c++", "c#", "go"]`. Case is preserved; callers lower-case first.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if is_token_char(ch) {
            current.push(ch);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

fn is_token_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '+' || ch == '#'
}

/// Find the first `<digits>[+][whitespace]<unit>` expression.
///
/// Numbers too large for `u32` saturate rather than being dropped.
pub fn parse_min_experience(text: &str) -> Option<u32> {
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();

        if digits == 0 {
            pos += rest.chars().next().map_or(1, char::len_utf8);
            continue;
        }

        let tail = &rest[digits..];
        let tail = tail.strip_prefix('+').unwrap_or(tail).trim_start();
        if EXPERIENCE_UNITS.iter().any(|unit| tail.starts_with(unit)) {
            return Some(rest[..digits].parse().unwrap_or(u32::MAX));
        }

        pos += digits;
    }

    None
}

/// First domain keyword contained in `text`, in [`DOMAIN_KEYWORDS`] order.
pub fn detect_domain(text: &str) -> Option<&'static str> {
    DOMAIN_KEYWORDS.iter().copied().find(|d| text.contains(d))
}

/// Highest-priority availability state contained in `text`.
pub fn detect_availability(text: &str) -> Option<&'static str> {
    AVAILABILITY_STATES
        .iter()
        .rev()
        .copied()
        .find(|state| text.contains(state))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(skills: &[&str]) -> HashSet<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tokenize_keeps_plus_and_hash() {
        assert_eq!(tokenize("c++, c# & go!"), vec!["c++", "c#", "go"]);
    }

    #[test]
    fn test_tokenize_splits_on_punctuation_and_digits() {
        assert_eq!(
            tokenize("node.js/react3native"),
            vec!["node", "js", "react", "native"]
        );
        assert!(tokenize("  42 -- ").is_empty());
    }

    #[test]
    fn test_min_experience_variants() {
        assert_eq!(parse_min_experience("3+ years"), Some(3));
        assert_eq!(parse_min_experience("needs 5 yrs"), Some(5));
        assert_eq!(parse_min_experience("1 year"), Some(1));
        assert_eq!(parse_min_experience("10years"), Some(10));
        assert_eq!(parse_min_experience("4+years"), Some(4));
    }

    #[test]
    fn test_min_experience_first_match_wins() {
        assert_eq!(parse_min_experience("2 years or 6 years"), Some(2));
        assert_eq!(parse_min_experience("team of 12, 7 years"), Some(7));
    }

    #[test]
    fn test_min_experience_requires_unit() {
        assert_eq!(parse_min_experience("3 people"), None);
        assert_eq!(parse_min_experience("3 + years"), None);
        assert_eq!(parse_min_experience("years of work"), None);
    }

    #[test]
    fn test_min_experience_handles_multibyte_text() {
        assert_eq!(parse_min_experience("développeur 4 ans, 6 years"), Some(6));
    }

    #[test]
    fn test_min_experience_saturates() {
        assert_eq!(
            parse_min_experience("99999999999 years"),
            Some(u32::MAX)
        );
    }

    #[test]
    fn test_domain_uses_list_order() {
        // "retail" appears after "logistics" in the query, but earlier in the list.
        assert_eq!(detect_domain("logistics and retail"), Some("retail"));
        assert_eq!(detect_domain("nlp engineer"), Some("nlp"));
        assert_eq!(detect_domain("backend engineer"), None);
    }

    #[test]
    fn test_domain_matches_substrings() {
        // "ai" is contained in "available".
        assert_eq!(detect_domain("someone available"), Some("ai"));
    }

    #[test]
    fn test_availability_priority() {
        assert_eq!(detect_availability("available now"), Some("available"));
        assert_eq!(detect_availability("busy or available"), Some("busy"));
        assert_eq!(
            detect_availability("on notice, maybe available"),
            Some("notice")
        );
        assert_eq!(detect_availability("anyone"), None);
    }

    #[test]
    fn test_extract_full_query() {
        let hints = extract(
            "Python developer with 3+ years experience in Retail, available",
            &vocab(&["python", "aws"]),
        );
        assert_eq!(hints.skills, BTreeSet::from(["python".to_string()]));
        assert_eq!(hints.min_exp, Some(3));
        assert_eq!(hints.domain.as_deref(), Some("retail"));
        assert_eq!(hints.availability.as_deref(), Some("available"));
    }

    #[test]
    fn test_extract_skills_only_from_vocabulary() {
        let hints = extract("c++ and rust and cobol", &vocab(&["c++", "rust"]));
        let skills: Vec<&str> = hints.skills.iter().map(String::as_str).collect();
        assert_eq!(skills, vec!["c++", "rust"]);
    }

    #[test]
    fn test_extract_multi_word_skill_never_matches_as_token() {
        let hints = extract("machine learning", &vocab(&["machine learning"]));
        assert!(hints.skills.is_empty());
    }

    #[test]
    fn test_extract_empty_query() {
        let hints = extract("", &vocab(&["python"]));
        assert!(hints.is_empty());
        assert_eq!(hints, QueryHints::default());
    }
}
