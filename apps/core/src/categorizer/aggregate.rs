//! Grouping and ordering of classified feature lines.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::Category;
use super::complexity::Complexity;
use super::parser::Priority;

/// A fully classified feature line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureLine {
    /// Description without the priority annotation
    pub text: String,
    pub priority: Priority,
    pub complexity: Complexity,
    pub category: Category,
}

/// All features of one category, high priority first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub features: Vec<FeatureLine>,
}

impl CategoryGroup {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Number of features with the given priority
    pub fn count_priority(&self, priority: Priority) -> usize {
        self.features
            .iter()
            .filter(|f| f.priority == priority)
            .count()
    }
}

/// Group features by category.
///
/// Groups come out in `Category` declaration order and only non-empty ones
/// are returned. Inside a group features are stable-sorted by priority, so
/// lines of equal priority keep their input order.
pub fn aggregate(features: Vec<FeatureLine>) -> Vec<CategoryGroup> {
    // Category's Ord is its declaration order.
    let mut buckets: BTreeMap<Category, Vec<FeatureLine>> = BTreeMap::new();
    for feature in features {
        buckets.entry(feature.category).or_default().push(feature);
    }

    buckets
        .into_iter()
        .map(|(category, mut features)| {
            features.sort_by_key(|f| f.priority);
            CategoryGroup { category, features }
        })
        .collect()
}
