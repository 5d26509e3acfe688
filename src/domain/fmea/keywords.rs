//! Risk keyword table.
//!
//! Every keyword found anywhere in the lowercased problem/decision text
//! contributes its deltas. Matching is plain substring containment, so
//! "ai" also fires inside words like "maintain".

use serde::Serialize;

/// Deltas contributed by one risky keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeywordWeight {
    pub keyword: &'static str,
    pub severity_delta: i32,
    pub occurrence_delta: i32,
    pub detection_delta: i32,
}

impl KeywordWeight {
    const fn new(
        keyword: &'static str,
        severity_delta: i32,
        occurrence_delta: i32,
        detection_delta: i32,
    ) -> Self {
        Self {
            keyword,
            severity_delta,
            occurrence_delta,
            detection_delta,
        }
    }

    /// Returns true if the keyword occurs in already-lowercased text.
    pub fn matches(&self, lowercase_text: &str) -> bool {
        lowercase_text.contains(self.keyword)
    }
}

/// All risky keywords, lowercase.
pub const RISK_KEYWORDS: &[KeywordWeight] = &[
    KeywordWeight::new("merger", 2, 1, -1),
    KeywordWeight::new("acquisition", 2, 1, -1),
    KeywordWeight::new("layoff", 2, 2, -1),
    KeywordWeight::new("restructure", 1, 1, -1),
    KeywordWeight::new("pivot", 2, 1, -1),
    KeywordWeight::new("ai", 1, 1, -1),
    KeywordWeight::new("cloud", 1, 0, 0),
    KeywordWeight::new("shutdown", 3, 2, -2),
    KeywordWeight::new("outsourcing", 1, 1, 0),
    KeywordWeight::new("offshoring", 1, 1, 0),
    KeywordWeight::new("automation", 1, 1, 0),
    KeywordWeight::new("cybersecurity", 2, 1, 1),
    KeywordWeight::new("compliance", 1, 0, 2),
    KeywordWeight::new("regulation", 1, 0, 2),
    KeywordWeight::new("expansion", 1, 1, -1),
];

/// Returns the keywords that occur in already-lowercased text, in table order.
pub fn matching_keywords(lowercase_text: &str) -> impl Iterator<Item = &'static KeywordWeight> + '_ {
    RISK_KEYWORDS.iter().filter(move |kw| kw.matches(lowercase_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_keywords_are_lowercase() {
        for kw in RISK_KEYWORDS {
            assert_eq!(kw.keyword, kw.keyword.to_lowercase());
        }
    }

    #[test]
    fn table_keywords_are_unique() {
        for (i, kw) in RISK_KEYWORDS.iter().enumerate() {
            assert!(RISK_KEYWORDS[i + 1..].iter().all(|other| other.keyword != kw.keyword));
        }
    }

    #[test]
    fn matching_is_substring_containment() {
        let found: Vec<_> = matching_keywords("we must maintain the cloud")
            .map(|kw| kw.keyword)
            .collect();
        assert_eq!(found, vec!["ai", "cloud"]);
    }

    #[test]
    fn no_keywords_in_empty_text() {
        assert_eq!(matching_keywords("").count(), 0);
        assert_eq!(matching_keywords(" ").count(), 0);
    }

    #[test]
    fn shutdown_is_heaviest_severity() {
        let max = RISK_KEYWORDS.iter().max_by_key(|kw| kw.severity_delta).unwrap();
        assert_eq!(max.keyword, "shutdown");
    }
}
