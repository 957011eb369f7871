//! Test Module
//!
//! Scenario-level tests on top of the unit tests that live next to the code.
//!
//! ## Test Categories
//! - `categorizer_tests`: end-to-end categorization scenarios and properties
//! - `text_extract_tests`: source files in every supported format
//! - `config_tests`: environment-driven configuration

pub mod config_tests;
pub mod text_extract_tests;
