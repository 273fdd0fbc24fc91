//! Core domain entities.
//!
//! The service stores a single entity: [`Link`], a mapping from a unique
//! short name to a destination URL. [`NewLink`] carries creation input
//! before the store has assigned an id.

pub mod link;

pub use link::{Link, NewLink};
