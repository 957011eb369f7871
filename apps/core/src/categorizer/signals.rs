//! Keyword signal matching shared by the category and complexity classifiers.
//!
//! Each keyword is a case-insensitive regex fragment. Plain words match as
//! substrings; short or ambiguous terms carry `\b` anchors (`\bai\b` matches
//! "AI/ML" and "(AI)" but not "email").

use regex::Regex;

/// Ordered keyword patterns, compiled once
pub(crate) struct SignalSet {
    patterns: Vec<Regex>,
}

impl SignalSet {
    /// Compile a keyword table. Panics on an invalid pattern.
    pub(crate) fn new(name: &str, keywords: &[&str]) -> Self {
        let patterns = keywords
            .iter()
            .map(|kw| {
                Regex::new(&format!("(?i){}", kw))
                    .unwrap_or_else(|e| panic!("Invalid regex in {} signals '{}': {}", name, kw, e))
            })
            .collect();

        Self { patterns }
    }

    /// Matched text of the first listed keyword found in `text`, lower-cased
    pub(crate) fn find(&self, text: &str) -> Option<String> {
        self.patterns
            .iter()
            .find_map(|pattern| pattern.find(text))
            .map(|m| m.as_str().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_edge_keyword() {
        let set = SignalSet::new("test", &[r"\bai\b"]);
        assert_eq!(set.find("Add AI").as_deref(), Some("ai"));
        assert_eq!(set.find("AI/ML models").as_deref(), Some("ai"));
        assert_eq!(set.find("Smart search (AI)").as_deref(), Some("ai"));
        assert_eq!(set.find("AI, chat and more").as_deref(), Some("ai"));
        assert_eq!(set.find("Send email"), None);
    }

    #[test]
    fn test_plain_keyword_is_substring() {
        let set = SignalSet::new("test", &["optimiz"]);
        assert_eq!(set.find("Optimize images").as_deref(), Some("optimiz"));
    }

    #[test]
    fn test_first_listed_keyword_wins() {
        let set = SignalSet::new("test", &["page", "login"]);
        assert_eq!(set.find("Login page").as_deref(), Some("page"));
    }

    #[test]
    fn test_no_keywords_never_matches() {
        let set = SignalSet::new("test", &[]);
        assert_eq!(set.find("anything"), None);
    }
}
