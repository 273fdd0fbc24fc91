//! Repository trait for link data access.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::entities::{Link, NewLink};

/// Store-level failures surfaced by repository implementations.
///
/// Anything not covered by a specific variant is reported as
/// `Unavailable`; the service layer decides what callers get to see.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The unique constraint on `name` rejected an insert or rename.
    #[error("a link with this name already exists")]
    DuplicateName,

    /// Any other persistence failure.
    #[error("link store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

/// Repository interface for the link store.
///
/// Uniqueness of `name` is enforced by the store itself (a unique
/// constraint), not by a pre-check, so racing inserts cannot both
/// succeed. Absence is expressed as `Ok(None)` / `Ok(false)` rather
/// than as an error; the service layer translates it into not-found
/// outcomes.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link, generating a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateName`] if a link with the
    /// same `name` already exists, [`RepositoryError::Unavailable`] on
    /// any other persistence failure.
    async fn create(&self, new_link: NewLink) -> Result<Link, RepositoryError>;

    /// Finds a link by its id. `Ok(None)` when no row matches.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Link>, RepositoryError>;

    /// Finds a link by its short name. `Ok(None)` when no row matches.
    async fn find_by_name(&self, name: &str) -> Result<Option<Link>, RepositoryError>;

    /// Returns every stored link. Order is not significant.
    async fn list_all(&self) -> Result<Vec<Link>, RepositoryError>;

    /// Replaces `name` and `url` on an existing link.
    ///
    /// Returns `Ok(None)` when no row matched the id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateName`] if the new `name` is
    /// already taken by another link.
    async fn update(&self, id: Uuid, name: &str, url: &str)
    -> Result<Option<Link>, RepositoryError>;

    /// Deletes a link by id.
    ///
    /// Returns `Ok(false)` when zero rows were affected; the deletion
    /// itself is the source of truth for existence.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
