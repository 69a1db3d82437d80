//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Short URL creation, lookup and listing
//! - [`services::code_generator::CodeGenerator`] - Collision-checked short code generation

pub mod services;
