//! # Categorizer Module
//!
//! Sorts a free-text list of requested features into display groups.
//! Pure, synchronous, and total: every input, including the empty string,
//! produces a report.
//!
//! ## Components
//! - `parser`: line splitting and `(… priority)` suffix extraction
//! - `complexity`: keyword-based complexity tier
//! - `category`: ordered first-match category rules
//! - `aggregate`: grouping and priority ordering
//! - `report`: output data structure with counts and shares
//! - `analyzer`: main orchestrator

pub mod aggregate;
pub mod analyzer;
pub mod category;
pub mod complexity;
pub mod parser;
pub mod report;
mod signals;

pub use aggregate::{aggregate, CategoryGroup, FeatureLine};
pub use analyzer::{categorize, FeatureCategorizer};
pub use category::{classify_category, classify_category_detailed, Category, CategoryResult};
pub use complexity::{
    classify_complexity, classify_complexity_detailed, Complexity, ComplexityResult,
};
pub use parser::{parse, parse_line, ParsedLine, Priority};
pub use report::{ComplexityBreakdown, FeatureReport, PriorityBreakdown};
