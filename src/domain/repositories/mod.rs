//! Repository trait definitions for the domain layer.
//!
//! [`LinkRepository`] abstracts the persistent link store following the
//! Repository pattern. The concrete implementation lives in
//! [`crate::infrastructure::persistence`]; a mock is auto-generated via
//! `mockall` for service unit tests.

pub mod link_repository;

pub use link_repository::{LinkRepository, RepositoryError};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
