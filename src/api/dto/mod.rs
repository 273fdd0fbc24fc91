//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and
//! validator for input validation.

pub mod link;

pub use link::{CreateLinkRequest, LinkResponse, UpdateLinkRequest};
