//! Feature Report - output structure of a categorization pass.
//!
//! Holds the grouped feature lines plus the counts and shares a dashboard
//! shows next to them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::aggregate::{CategoryGroup, FeatureLine};
use super::category::Category;
use super::complexity::Complexity;
use super::parser::Priority;
use crate::error::{AppError, AppResult};

/// Share of `count` in `total` as a percentage with one decimal
fn percentage(count: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    let pct = count as f32 * 100.0 / total as f32;
    (pct * 10.0).round() / 10.0
}

/// Feature counts per priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityBreakdown {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityBreakdown {
    pub fn from_features<'a>(features: impl IntoIterator<Item = &'a FeatureLine>) -> Self {
        let mut breakdown = Self::default();
        for feature in features {
            match feature.priority {
                Priority::High => breakdown.high += 1,
                Priority::Medium => breakdown.medium += 1,
                Priority::Low => breakdown.low += 1,
            }
        }
        breakdown
    }

    pub fn count(&self, priority: Priority) -> usize {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }

    pub fn percentage(&self, priority: Priority) -> f32 {
        percentage(self.count(priority), self.total())
    }
}

/// Feature counts per complexity tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityBreakdown {
    pub simple: usize,
    pub moderate: usize,
    pub complex: usize,
}

impl ComplexityBreakdown {
    pub fn from_features<'a>(features: impl IntoIterator<Item = &'a FeatureLine>) -> Self {
        let mut breakdown = Self::default();
        for feature in features {
            match feature.complexity {
                Complexity::Simple => breakdown.simple += 1,
                Complexity::Moderate => breakdown.moderate += 1,
                Complexity::Complex => breakdown.complex += 1,
            }
        }
        breakdown
    }

    pub fn count(&self, complexity: Complexity) -> usize {
        match complexity {
            Complexity::Simple => self.simple,
            Complexity::Moderate => self.moderate,
            Complexity::Complex => self.complex,
        }
    }

    pub fn total(&self) -> usize {
        self.simple + self.moderate + self.complex
    }

    pub fn percentage(&self, complexity: Complexity) -> f32 {
        percentage(self.count(complexity), self.total())
    }
}

/// Complete result of categorizing one block of feature text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureReport {
    /// Lines in the raw input, blank ones included
    pub source_lines: usize,

    /// Non-blank lines, one feature each
    pub total_features: usize,

    /// Non-empty groups in category order
    pub groups: Vec<CategoryGroup>,

    pub priorities: PriorityBreakdown,

    pub complexities: ComplexityBreakdown,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Timestamp of categorization
    pub timestamp: DateTime<Utc>,
}

impl FeatureReport {
    /// Build a report from aggregated groups
    pub fn new(source_lines: usize, groups: Vec<CategoryGroup>) -> Self {
        let features = groups.iter().flat_map(|g| g.features.iter());
        let priorities = PriorityBreakdown::from_features(features.clone());
        let complexities = ComplexityBreakdown::from_features(features);

        Self {
            source_lines,
            total_features: priorities.total(),
            groups,
            priorities,
            complexities,
            processing_time_ms: 0,
            timestamp: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_features == 0
    }

    /// Group for a category, if it has any features
    pub fn group(&self, category: Category) -> Option<&CategoryGroup> {
        self.groups.iter().find(|g| g.category == category)
    }

    /// Non-empty categories in display order
    pub fn categories(&self) -> Vec<Category> {
        self.groups.iter().map(|g| g.category).collect()
    }

    /// Every feature, group by group
    pub fn features(&self) -> impl Iterator<Item = &FeatureLine> {
        self.groups.iter().flat_map(|g| g.features.iter())
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Features: {}, Categories: {}, Priority: {}H/{}M/{}L, Complex: {:.0}%",
            self.total_features,
            self.groups.len(),
            self.priorities.high,
            self.priorities.medium,
            self.priorities.low,
            self.complexities.percentage(Complexity::Complex),
        )
    }

    /// Pretty-printed JSON rendering
    pub fn to_json_pretty(&self) -> AppResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Internal(format!("Failed to encode report: {}", e)))
    }

    /// Plain-text rendering: one section per category, then totals
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        for group in &self.groups {
            out.push_str(&format!("{} ({})\n", group.category, group.len()));
            for feature in &group.features {
                out.push_str(&format!(
                    "  [{}] [{}] {}\n",
                    feature.priority, feature.complexity, feature.text
                ));
            }
            out.push('\n');
        }

        out.push_str(&format!(
            "Total: {} features in {} categories\n",
            self.total_features,
            self.groups.len()
        ));
        for priority in Priority::ALL {
            out.push_str(&format!(
                "  {:<8} {:>3} ({:.1}%)\n",
                priority.label(),
                self.priorities.count(priority),
                self.priorities.percentage(priority)
            ));
        }
        for complexity in Complexity::ALL {
            out.push_str(&format!(
                "  {:<8} {:>3} ({:.1}%)\n",
                complexity.label(),
                self.complexities.count(complexity),
                self.complexities.percentage(complexity)
            ));
        }

        out
    }
}
