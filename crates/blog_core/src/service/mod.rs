//! Core use-case services.
//!
//! # Responsibility
//! - Read the state a validator needs, validate, then delegate to storage.
//! - Keep callers decoupled from storage details.
//!
//! # Invariants
//! - A rejected write never reaches the repository.
//! - Log events carry ids, field names and rule codes only, never field values.

use crate::model::error::ValidationError;
use log::warn;

pub mod author_service;
pub mod post_service;

fn log_rejection(event: &str, err: &ValidationError) {
    warn!(
        "event={event} module=service status=rejected field={} rule={}",
        err.field(),
        err.code()
    );
}
