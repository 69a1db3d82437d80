//! HTTP API layer.
//!
//! Translates HTTP requests into service calls and service outcomes into
//! HTTP responses.
//!
//! # Modules
//!
//! - [`dto`] - Request/response shapes
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
