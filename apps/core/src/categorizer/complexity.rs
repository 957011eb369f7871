//! Complexity tiering.
//!
//! A coarse estimate of implementation effort from keyword signals alone.
//! Heavy signals are checked before light ones, so a line matching both is
//! `Complex`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::signals::SignalSet;

/// Terms that push a feature into the complex tier
const COMPLEX_SIGNALS: &[&str] = &[
    // AI/ML
    r"\bai\b",
    "artificial intelligence",
    "machine learning",
    r"\bml\b",
    "neural",
    "recommendation engine",
    "prediction",
    "predictive",
    "chatbot",
    // Distributed systems
    "blockchain",
    "distributed",
    "microservice",
    // Live data and media
    "real-time",
    "realtime",
    "real time",
    "live tracking",
    "video",
    "streaming",
    "computer vision",
    // Explicit
    "advanced",
    "complex algorithm",
];

/// Terms that mark a feature as a trivial change
const SIMPLE_SIGNALS: &[&str] = &[
    "button",
    "text change",
    "copy change",
    r"\btypos?\b",
    "color",
    "colour",
    "font",
    "label",
    "tooltip",
    "placeholder",
    "simple",
    "basic",
    "static",
    "link",
    r"\blogos?\b",
];

static COMPLEX: LazyLock<SignalSet> = LazyLock::new(|| SignalSet::new("complex", COMPLEX_SIGNALS));
static SIMPLE: LazyLock<SignalSet> = LazyLock::new(|| SignalSet::new("simple", SIMPLE_SIGNALS));

/// Estimated implementation effort
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    #[default]
    Moderate,
    Complex,
}

impl Complexity {
    pub const ALL: [Complexity; 3] = [Complexity::Simple, Complexity::Moderate, Complexity::Complex];

    pub fn label(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Moderate => "moderate",
            Complexity::Complex => "complex",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Complexity with the keyword that decided it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityResult {
    pub complexity: Complexity,
    /// Matched signal, `None` for the moderate fallback
    pub signal: Option<String>,
}

/// Classify and report the deciding signal.
pub fn classify_complexity_detailed(text: &str) -> ComplexityResult {
    if let Some(signal) = COMPLEX.find(text) {
        return ComplexityResult {
            complexity: Complexity::Complex,
            signal: Some(signal),
        };
    }

    if let Some(signal) = SIMPLE.find(text) {
        return ComplexityResult {
            complexity: Complexity::Simple,
            signal: Some(signal),
        };
    }

    ComplexityResult {
        complexity: Complexity::Moderate,
        signal: None,
    }
}

pub fn classify_complexity(text: &str) -> Complexity {
    classify_complexity_detailed(text).complexity
}
