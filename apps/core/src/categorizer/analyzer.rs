//! Feature Categorizer - main orchestrator for the categorizer module.
//!
//! Runs parsing, complexity and category classification, grouping, and
//! report assembly over one block of feature text.

use chrono::Utc;
use std::time::Instant;
use tracing::{debug, info};

use super::aggregate::{aggregate, FeatureLine};
use super::category::classify_category_detailed;
use super::complexity::classify_complexity_detailed;
use super::parser::{parse, Priority};
use super::report::FeatureReport;

/// Turns free-text feature lists into grouped reports.
///
/// Holds no state; any number of threads may share one instance.
#[derive(Debug, Default, Clone, Copy)]
pub struct FeatureCategorizer;

impl FeatureCategorizer {
    pub fn new() -> Self {
        Self
    }

    /// Classify a single, already parsed line
    pub fn classify_line(&self, text: &str, priority: Priority) -> FeatureLine {
        let category = classify_category_detailed(text);
        let complexity = classify_complexity_detailed(text);

        debug!(
            text,
            category = %category.category,
            keyword = category.keyword.as_deref().unwrap_or("-"),
            complexity = %complexity.complexity,
            signal = complexity.signal.as_deref().unwrap_or("-"),
            "Classified feature line"
        );

        FeatureLine {
            text: text.to_string(),
            priority,
            complexity: complexity.complexity,
            category: category.category,
        }
    }

    /// Categorize a raw multi-line block
    pub fn categorize(&self, raw_text: &str) -> FeatureReport {
        let start = Instant::now();

        let features: Vec<FeatureLine> = parse(raw_text)
            .into_iter()
            .map(|line| self.classify_line(&line.text, line.priority))
            .collect();

        let groups = aggregate(features);

        let mut report = FeatureReport::new(raw_text.lines().count(), groups);
        report.processing_time_ms = start.elapsed().as_millis() as u64;
        report.timestamp = Utc::now();

        info!("Categorized feature list. {}", report.summary());

        report
    }
}

/// Categorize with a default categorizer
pub fn categorize(raw_text: &str) -> FeatureReport {
    FeatureCategorizer::new().categorize(raw_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categorizer::{Category, Complexity};

    #[test]
    fn test_classify_line() {
        let categorizer = FeatureCategorizer::new();

        let feature = categorizer.classify_line("Implement Stripe checkout", Priority::Medium);
        assert_eq!(feature.category, Category::Payment);
        assert_eq!(feature.complexity, Complexity::Moderate);
        assert_eq!(feature.priority, Priority::Medium);
    }

    #[test]
    fn test_basic_categorization() {
        let report = categorize("Add login page (high priority)\n\nLaunch confetti animation");

        assert_eq!(report.source_lines, 3);
        assert_eq!(report.total_features, 2);
        assert_eq!(
            report.categories(),
            vec![Category::Authentication, Category::Other]
        );
        assert!(report.processing_time_ms < 5000);
    }

    #[test]
    fn test_empty_input() {
        let report = categorize("");
        assert!(report.is_empty());
        assert!(report.groups.is_empty());
    }
}
