//! Link CRUD business logic.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, RepositoryError};
use crate::error::AppError;

/// Service mediating between the HTTP layer and the link store.
///
/// Translates [`RepositoryError`] into [`AppError`] at this boundary:
/// duplicate names become conflicts, absent rows become not-found, and
/// everything else is logged and reported as an opaque internal error.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns every stored link.
    pub async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        self.repository.list_all().await.map_err(storage_failure)
    }

    /// Creates a link, delegating uniqueness entirely to the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] with the fixed message
    /// `"Short name already exists"` when the name is taken, and
    /// [`AppError::Internal`] on any other persistence failure.
    pub async fn create(&self, name: String, url: String) -> Result<Link, AppError> {
        self.repository
            .create(NewLink { name, url })
            .await
            .map_err(map_duplicate_name)
    }

    /// Resolves a short name to its link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] with a generic message when the
    /// name is unknown — redirect callers must not leak detail.
    pub async fn get_by_name(&self, name: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_name(name)
            .await
            .map_err(storage_failure)?
            .ok_or_else(|| AppError::not_found("Not Found"))
    }

    /// Fetches a link by id.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Link, AppError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(storage_failure)?
            .ok_or_else(|| AppError::not_found("Not Found"))
    }

    /// Replaces `name` and `url` wholesale on an existing link.
    ///
    /// The id is resolved first so an unknown id fails with
    /// [`AppError::NotFound`] before any write happens.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the replacement name is
    /// already taken by another link.
    pub async fn update(&self, id: Uuid, name: String, url: String) -> Result<Link, AppError> {
        self.get_by_id(id).await?;

        self.repository
            .update(id, &name, &url)
            .await
            .map_err(map_duplicate_name)?
            .ok_or_else(|| AppError::not_found("Not Found"))
    }

    /// Deletes a link by id.
    ///
    /// The deletion itself is the source of truth for existence: a
    /// delete affecting zero rows is a not-found, never a silent
    /// success, so a repeated delete reports 404.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self
            .repository
            .delete_by_id(id)
            .await
            .map_err(storage_failure)?;

        if !deleted {
            return Err(AppError::not_found(format!(
                "Link with ID: \"{id}\" not found"
            )));
        }

        Ok(())
    }
}

fn map_duplicate_name(e: RepositoryError) -> AppError {
    match e {
        RepositoryError::DuplicateName => AppError::conflict("Short name already exists"),
        other => storage_failure(other),
    }
}

fn storage_failure(e: RepositoryError) -> AppError {
    tracing::error!(error = %e, "link store failure");
    AppError::Internal
}
