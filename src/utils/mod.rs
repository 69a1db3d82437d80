//! Utility functions shared across the application.
//!
//! - [`code_generator`] - Short code candidate generation
//! - [`url_validation`] - Long URL validation

pub mod code_generator;
pub mod url_validation;
