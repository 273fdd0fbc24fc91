//! Infrastructure layer for external integrations.
//!
//! Implements the repository traits defined by the domain layer on top
//! of the SQLx SQLite driver.

pub mod persistence;
