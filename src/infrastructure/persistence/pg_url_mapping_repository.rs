//! PostgreSQL implementation of the url mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{LookupKey, NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;

/// Table used when no name is configured.
pub const DEFAULT_TABLE: &str = "url_mappings";

/// Longest accepted table name.
///
/// PostgreSQL truncates identifiers to 63 bytes; the longest derived index
/// name (`{table}_short_url_idx`) adds 14.
pub const MAX_TABLE_NAME_LEN: usize = 63 - "_short_url_idx".len();

/// Returns true if `name` is safe to splice into SQL as a table identifier.
///
/// Accepts `[A-Za-z_][A-Za-z0-9_]*`, at most [`MAX_TABLE_NAME_LEN`] bytes.
pub fn is_valid_table_name(name: &str) -> bool {
    let mut chars = name.chars();

    let Some(first) = chars.next() else {
        return false;
    };

    name.len() <= MAX_TABLE_NAME_LEN
        && (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[derive(sqlx::FromRow)]
struct UrlMappingRow {
    id: i64,
    long_url: String,
    short_url: String,
}

impl From<UrlMappingRow> for UrlMapping {
    fn from(row: UrlMappingRow) -> Self {
        UrlMapping::new(row.id, row.long_url, row.short_url)
    }
}

/// PostgreSQL repository for url mappings.
///
/// The table name is configurable, so statements are built at runtime. Values
/// are always bound as parameters; only the validated table name is spliced.
pub struct PgUrlMappingRepository {
    pool: Arc<PgPool>,
    table: String,
}

impl PgUrlMappingRepository {
    /// Creates a repository over the default table.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            pool,
            table: DEFAULT_TABLE.to_string(),
        }
    }

    /// Creates a repository over a custom table.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if `table` is not a plain identifier.
    pub fn with_table(pool: Arc<PgPool>, table: impl Into<String>) -> Result<Self, AppError> {
        let table = table.into();

        if !is_valid_table_name(&table) {
            return Err(AppError::internal(format!("Invalid table name '{table}'")));
        }

        Ok(Self { pool, table })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Creates the table and its lookup indexes if they are missing.
    ///
    /// Indexes are non-unique; the service checks for duplicates before
    /// inserting.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        let table = &self.table;

        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {table} (
                id BIGSERIAL PRIMARY KEY,
                long_url TEXT NOT NULL,
                short_url TEXT NOT NULL
            )
            "#
        ))
        .execute(self.pool.as_ref())
        .await?;

        sqlx::query(&format!(
            "CREATE INDEX IF NOT EXISTS {table}_short_url_idx ON {table} (short_url)"
        ))
        .execute(self.pool.as_ref())
        .await?;

        sqlx::query(&format!(
            "CREATE INDEX IF NOT EXISTS {table}_long_url_idx ON {table} (long_url)"
        ))
        .execute(self.pool.as_ref())
        .await?;

        tracing::debug!(table = %table, "Schema ensured");

        Ok(())
    }
}

#[async_trait]
impl UrlMappingRepository for PgUrlMappingRepository {
    async fn find_all(&self) -> Result<Vec<UrlMapping>, AppError> {
        let rows = sqlx::query_as::<_, UrlMappingRow>(&format!(
            "SELECT id, long_url, short_url FROM {} ORDER BY id",
            self.table
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(UrlMapping::from).collect())
    }

    async fn find_one(&self, key: &LookupKey) -> Result<Option<UrlMapping>, AppError> {
        let (column, value) = match key {
            LookupKey::ShortUrl(code) => ("short_url", code),
            LookupKey::LongUrl(url) => ("long_url", url),
        };

        let row = sqlx::query_as::<_, UrlMappingRow>(&format!(
            "SELECT id, long_url, short_url FROM {} WHERE {column} = $1 ORDER BY id LIMIT 1",
            self.table
        ))
        .bind(value)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlMapping::from))
    }

    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let row = sqlx::query_as::<_, UrlMappingRow>(&format!(
            r#"
            INSERT INTO {} (long_url, short_url)
            VALUES ($1, $2)
            RETURNING id, long_url, short_url
            "#,
            self.table
        ))
        .bind(&new_mapping.long_url)
        .bind(&new_mapping.short_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_table_names() {
        assert!(is_valid_table_name("url_mappings"));
        assert!(is_valid_table_name("_private"));
        assert!(is_valid_table_name("UrlMap2"));
    }

    #[test]
    fn test_invalid_table_names() {
        assert!(!is_valid_table_name(""));
        assert!(!is_valid_table_name("2urls"));
        assert!(!is_valid_table_name("urls; DROP TABLE users"));
        assert!(!is_valid_table_name("public.urls"));
        assert!(!is_valid_table_name(&"a".repeat(64)));
    }

    #[test]
    fn test_table_name_leaves_room_for_index_names() {
        assert_eq!(MAX_TABLE_NAME_LEN, 49);
        assert!(is_valid_table_name(&"a".repeat(49)));
        assert!(!is_valid_table_name(&"a".repeat(50)));

        let table = "a".repeat(MAX_TABLE_NAME_LEN);
        let short_idx = format!("{table}_short_url_idx");
        let long_idx = format!("{table}_long_url_idx");
        assert!(short_idx.len() <= 63);
        assert!(long_idx.len() <= 63);
        assert_ne!(short_idx, long_idx);
    }
}
