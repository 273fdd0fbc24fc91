//! SQLite implementation of the link repository.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, RepositoryError};

/// SQLite repository for link storage and retrieval.
///
/// Ids are UUIDv4, generated here at insert time and stored as BLOBs.
/// Uniqueness of `name` rests entirely on the `UNIQUE` column
/// constraint; there is no pre-check, so concurrent inserts of the same
/// name are arbitrated by the database and exactly one wins.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

fn read_link(row: &SqliteRow) -> Result<Link, sqlx::Error> {
    Ok(Link::new(
        row.try_get("id")?,
        row.try_get("name")?,
        row.try_get("url")?,
    ))
}

/// Maps the driver's unique-violation signal explicitly instead of
/// matching on an engine-specific error code. The `name` column carries
/// the only unique constraint a write can trip over: id collisions are
/// ruled out by v4 generation.
fn map_write_error(e: sqlx::Error) -> RepositoryError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return RepositoryError::DuplicateName;
        }
    }

    RepositoryError::Unavailable(e)
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, RepositoryError> {
        let id = Uuid::new_v4();

        sqlx::query("INSERT INTO links (id, name, url) VALUES (?, ?, ?)")
            .bind(id)
            .bind(&new_link.name)
            .bind(&new_link.url)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_write_error)?;

        Ok(Link::new(id, new_link.name, new_link.url))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Link>, RepositoryError> {
        let row = sqlx::query("SELECT id, name, url FROM links WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        match row {
            Some(row) => Ok(Some(read_link(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Link>, RepositoryError> {
        let row = sqlx::query("SELECT id, name, url FROM links WHERE name = ?")
            .bind(name)
            .fetch_optional(self.pool.as_ref())
            .await?;

        match row {
            Some(row) => Ok(Some(read_link(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> Result<Vec<Link>, RepositoryError> {
        let rows = sqlx::query("SELECT id, name, url FROM links")
            .fetch_all(self.pool.as_ref())
            .await?;

        let mut links = Vec::with_capacity(rows.len());
        for row in &rows {
            links.push(read_link(row)?);
        }

        Ok(links)
    }

    async fn update(
        &self,
        id: Uuid,
        name: &str,
        url: &str,
    ) -> Result<Option<Link>, RepositoryError> {
        let result = sqlx::query("UPDATE links SET name = ?, url = ? WHERE id = ?")
            .bind(name)
            .bind(url)
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(Link::new(id, name.to_string(), url.to_string())))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM links WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
