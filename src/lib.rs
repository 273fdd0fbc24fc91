//! # golinks
//!
//! A small named short-link service built with Axum and SQLite.
//!
//! Stores mappings from a unique, human-chosen short name to a
//! destination URL, exposes JSON CRUD over `/links`, and serves an
//! HTTP 301 redirect for `GET /{name}`.
//!
//! ## Architecture
//!
//! The crate follows a layered layout with clear separation:
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::entities::Link`] entity and
//!   the [`domain::repositories::LinkRepository`] store contract
//! - **Application Layer** ([`application`]) - Business logic; translates
//!   store outcomes into domain-visible errors
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLx-backed persistence
//! - **API Layer** ([`api`]) - REST handlers, DTOs, validation, and routes
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://golinks.db?mode=rwc"
//! export LISTEN="0.0.0.0:3000"
//!
//! cargo run
//! ```
//!
//! Migrations in `./migrations` are applied automatically at startup.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
