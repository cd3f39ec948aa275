//! Author domain model and field validators.
//!
//! # Responsibility
//! - Define the persisted `Author` record and its validated write inputs.
//! - Own name and phone-number rules.
//!
//! # Invariants
//! - `NewAuthor` / `AuthorChanges` can only be built through validation.
//! - Name uniqueness is checked against a caller-supplied name set. Two
//!   concurrent writers can both pass this check; the storage `UNIQUE`
//!   constraint is the only backstop.

use super::error::{ValidationError, ValidationResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Storage-assigned author identifier.
pub type AuthorId = i64;

/// Required phone number length, in characters.
pub const PHONE_NUMBER_LEN: usize = 10;

static PHONE_DIGITS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]*$").expect("valid phone digits regex"));

/// Persisted author record as read back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub phone_number: String,
    /// Unix epoch milliseconds, set once on insert.
    pub created_at: i64,
    /// Unix epoch milliseconds of the last update; `None` until first update.
    pub updated_at: Option<i64>,
}

/// Checks that `candidate` is non-empty and not already taken.
///
/// `existing_names` must be a fresh read of stored author names.
pub fn validate_name<'a>(
    candidate: &'a str,
    existing_names: &BTreeSet<String>,
) -> ValidationResult<&'a str> {
    if candidate.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if existing_names.contains(candidate) {
        return Err(ValidationError::DuplicateName);
    }
    Ok(candidate)
}

/// Checks that `candidate` is exactly ten ASCII digits.
///
/// Formatting characters (`+`, `-`, spaces) are not stripped.
pub fn validate_phone_number(candidate: &str) -> ValidationResult<&str> {
    if candidate.chars().count() != PHONE_NUMBER_LEN {
        return Err(ValidationError::PhoneNumberLength);
    }
    if !PHONE_DIGITS_RE.is_match(candidate) {
        return Err(ValidationError::PhoneNumberNotNumeric);
    }
    Ok(candidate)
}

/// Validated input for creating an author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    name: String,
    phone_number: String,
}

impl NewAuthor {
    /// Runs every author validator and returns an insert-ready value.
    ///
    /// # Errors
    /// - Returns the first failing rule, checked in `name`, `phone_number` order.
    pub fn validate(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        existing_names: &BTreeSet<String>,
    ) -> ValidationResult<Self> {
        let name = name.into();
        let phone_number = phone_number.into();
        validate_name(&name, existing_names)?;
        validate_phone_number(&phone_number)?;
        Ok(Self { name, phone_number })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }
}

/// Unvalidated partial update for an author. `None` leaves a field as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorPatch {
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

impl AuthorPatch {
    /// Validates every present field.
    ///
    /// `existing_names` should exclude the target author's own current name so
    /// that re-submitting an unchanged name is accepted.
    pub fn validate(self, existing_names: &BTreeSet<String>) -> ValidationResult<AuthorChanges> {
        if let Some(name) = self.name.as_deref() {
            validate_name(name, existing_names)?;
        }
        if let Some(phone_number) = self.phone_number.as_deref() {
            validate_phone_number(phone_number)?;
        }
        Ok(AuthorChanges {
            name: self.name,
            phone_number: self.phone_number,
        })
    }
}

/// Validated partial update for an author.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorChanges {
    name: Option<String>,
    phone_number: Option<String>,
}

impl AuthorChanges {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    /// Returns whether no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone_number.is_none()
    }
}
