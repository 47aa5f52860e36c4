//! Domain model for collectible figure records.
//!
//! # Responsibility
//! - Define the canonical record persisted per user collection.
//! - Own construction-time validation and the on-disk wire shape.
//!
//! # Invariants
//! - Every record is identified by its `id` within one user collection.
//! - Deletion removes the record; there are no tombstones.

pub mod figure;
