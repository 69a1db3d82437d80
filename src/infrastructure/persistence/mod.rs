//! Repository implementations.
//!
//! - [`PgUrlMappingRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryUrlMappingRepository`] - Process-local storage

pub mod memory_url_mapping_repository;
pub mod pg_url_mapping_repository;

pub use memory_url_mapping_repository::InMemoryUrlMappingRepository;
pub use pg_url_mapping_repository::{
    DEFAULT_TABLE, MAX_TABLE_NAME_LEN, PgUrlMappingRepository, is_valid_table_name,
};
