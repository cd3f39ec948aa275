//! Field validation error shared by author and post validators.
//!
//! # Invariants
//! - One variant per rejected rule; `Display` yields the user-facing message.
//! - Messages never embed the rejected value, so errors are safe to log.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Rejection raised when a candidate field value breaks a record rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// Author name has zero characters.
    EmptyName,
    /// Author name matches an existing author.
    DuplicateName,
    /// Phone number is not exactly 10 characters long.
    PhoneNumberLength,
    /// Phone number contains a character outside `0-9`.
    PhoneNumberNotNumeric,
    /// Post title has zero characters.
    EmptyTitle,
    /// Post title contains none of the clickbait keywords.
    MissingClickbaitKeyword,
    /// Post content is shorter than the minimum.
    ContentTooShort,
    /// Post summary is longer than the maximum.
    SummaryTooLong,
    /// Post category is neither `Fiction` nor `Non-Fiction`.
    InvalidCategory,
}

impl ValidationError {
    /// Name of the record field that was rejected.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName | Self::DuplicateName => "name",
            Self::PhoneNumberLength | Self::PhoneNumberNotNumeric => "phone_number",
            Self::EmptyTitle | Self::MissingClickbaitKeyword => "title",
            Self::ContentTooShort => "content",
            Self::SummaryTooLong => "summary",
            Self::InvalidCategory => "category",
        }
    }

    /// Stable machine-readable rule code, used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyName => "empty_name",
            Self::DuplicateName => "duplicate_name",
            Self::PhoneNumberLength => "phone_number_length",
            Self::PhoneNumberNotNumeric => "phone_number_not_numeric",
            Self::EmptyTitle => "empty_title",
            Self::MissingClickbaitKeyword => "missing_clickbait_keyword",
            Self::ContentTooShort => "content_too_short",
            Self::SummaryTooLong => "summary_too_long",
            Self::InvalidCategory => "invalid_category",
        }
    }

    /// Human-readable message for callers.
    pub fn message(&self) -> &'static str {
        match self {
            Self::EmptyName => "Names must have at least one character.",
            Self::DuplicateName => "there is already an author with that name.",
            Self::PhoneNumberLength => "Phone numbers must have 10 digits.",
            Self::PhoneNumberNotNumeric => "Phone numbers must be numbers.",
            Self::EmptyTitle => "Posts must have titles.",
            Self::MissingClickbaitKeyword => "Title does not contain clickbait keywords.",
            Self::ContentTooShort => "Posts must be at least 250 characters.",
            Self::SummaryTooLong => "Summaries must not exceed 250 characters.",
            Self::InvalidCategory => "Category must be either Fiction or Non-Fiction.",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for ValidationError {}
