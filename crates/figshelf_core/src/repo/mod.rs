//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for figure collections.
//! - Keep file layout details out of the service layer.
//!
//! # Invariants
//! - Write paths call `Figure::validate()` before touching disk.
//! - Semantic conditions (`AlreadyExists`, `NotFound`) are distinct from
//!   I/O and parse failures.

pub mod figure_repo;
