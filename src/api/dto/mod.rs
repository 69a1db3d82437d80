//! Data Transfer Objects for API requests and responses.
//!
//! The mapping projection itself is
//! [`crate::domain::entities::LongUrlShortUrl`]; error bodies are
//! [`crate::error::ErrorResponse`].

pub mod create;
pub mod health;
