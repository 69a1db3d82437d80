//! HTTP request handlers.
//!
//! Each handler is a thin shim over [`crate::application::services::UrlService`]:
//! success becomes a 2xx response, [`crate::error::AppError`] becomes its
//! declared status with an `ErrorResponse` body.

pub mod create;
pub mod health;
pub mod list;
pub mod redirect;

pub use create::create_handler;
pub use health::health_handler;
pub use list::list_handler;
pub use redirect::redirect_handler;
