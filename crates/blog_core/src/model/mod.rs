//! Blog domain model: author and post records plus their field validators.
//!
//! # Responsibility
//! - Define persisted record shapes and validated write inputs.
//! - Keep every field rule in one place, independent of storage.
//!
//! # Invariants
//! - Validators are synchronous accept/reject functions that return the
//!   accepted value unchanged.
//! - Write inputs (`NewAuthor`, `NewPost`, `*Changes`) are only constructible
//!   through validation.

pub mod author;
pub mod error;
pub mod post;
