//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into user-facing outcomes.
//! - Keep the CLI decoupled from storage details.

pub mod collection_service;
