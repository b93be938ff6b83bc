//! Test modules for Moku.
//!
//! Crate-level tests that span more than one module:
//! - Configuration loading and validation
//! - Error formatting
//! - Word-list loading against real files
//! - Shared fixtures and proptest strategies

pub mod error_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{word_list_strategy, TestFixture};
