//! Business logic services for the application layer.

pub mod code_generator;
pub mod url_service;

pub use code_generator::{CodeGenerator, DEFAULT_MAX_ATTEMPTS, GenerateError};
pub use url_service::UrlService;
