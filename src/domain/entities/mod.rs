//! Core domain entities.
//!
//! - [`UrlMapping`] - A persisted long URL / short code pair
//! - [`LongUrlShortUrl`] - Identity-free projection used in every response
//! - [`NewUrlMapping`] - Insert payload, id assigned by the store
//! - [`LookupKey`] - Which field a single-mapping lookup filters on

pub mod url_mapping;

pub use url_mapping::{LongUrlShortUrl, LookupKey, NewUrlMapping, UrlMapping};
