//! Application layer services implementing business logic.
//!
//! Services consume repository traits, translate store-level outcomes
//! into the domain-visible error taxonomy, and provide a clean API for
//! HTTP handlers. Store errors are mapped exactly once, here — nothing
//! reaches the HTTP layer unmapped.

pub mod services;
