//! Feature list parsing.
//!
//! Splits a free-text block into one entry per non-blank line and pulls the
//! optional trailing `(high|medium|low priority)` annotation off each line.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Urgency attached to a feature line.
///
/// Declaration order is the display rank: `High < Medium < Low`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// All priorities in rank order
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(format!("Unknown priority: {}", other)),
        }
    }
}

/// A single feature line before classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLine {
    /// Description with the priority annotation removed
    pub text: String,
    /// Annotated priority, `Medium` when absent
    pub priority: Priority,
}

// Anchored at end of the (already trimmed) line.
static PRIORITY_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\(\s*(high|medium|low)\s+priority\s*\)$")
        .expect("Invalid regex: priority suffix pattern")
});

/// Split one trimmed line into its description and priority.
pub fn parse_line(line: &str) -> ParsedLine {
    let line = line.trim();

    if let Some(caps) = PRIORITY_SUFFIX.captures(line) {
        let priority = caps
            .get(1)
            .and_then(|m| m.as_str().parse::<Priority>().ok())
            .unwrap_or_default();
        let start = caps.get(0).map(|m| m.start()).unwrap_or(line.len());

        return ParsedLine {
            text: line[..start].trim_end().to_string(),
            priority,
        };
    }

    ParsedLine {
        text: line.to_string(),
        priority: Priority::Medium,
    }
}

/// Parse a raw multi-line block. Blank lines are skipped, nothing else is.
pub fn parse(raw_text: &str) -> Vec<ParsedLine> {
    raw_text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}
