//! Domain layer containing the core business model.
//!
//! Defines the [`entities::Link`] entity and the repository trait that
//! abstracts the persistent store. The domain layer carries no HTTP or
//! routing concerns; store contracts defined here are implemented in
//! [`crate::infrastructure`] and consumed by [`crate::application`].

pub mod entities;
pub mod repositories;
