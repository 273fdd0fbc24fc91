//! Link entity representing a named short-link mapping.

use uuid::Uuid;

/// A stored mapping from a unique short name to a destination URL.
///
/// The `id` is assigned by the store at creation time and never changes.
/// `name` is globally unique and serves as the redirect lookup key;
/// `name` and `url` are only ever replaced together, never partially.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: Uuid,
    pub name: String,
    pub url: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: Uuid, name: String, url: String) -> Self {
        Self { id, name, url }
    }
}

/// Input data for creating a new link.
///
/// The id is not part of the input; the store generates it on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub name: String,
    pub url: String,
}
