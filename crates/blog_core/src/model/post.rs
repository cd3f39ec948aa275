//! Post domain model and field validators.
//!
//! # Responsibility
//! - Define the persisted `Post` record and its validated write inputs.
//! - Own title, content, summary and category rules.
//!
//! # Invariants
//! - All post validators are pure functions of their single input.
//! - Lengths are counted in Unicode scalar values, not bytes.
//! - `Category` text form is exactly `Fiction` or `Non-Fiction`.

use super::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Storage-assigned post identifier.
pub type PostId = i64;

/// A title must contain at least one of these substrings (case-sensitive).
pub const CLICKBAIT_KEYWORDS: [&str; 4] = ["Won't Believe", "Secret", "Top", "Guess"];
/// Minimum post content length, in characters.
pub const MIN_CONTENT_CHARS: usize = 250;
/// Maximum post summary length, in characters.
pub const MAX_SUMMARY_CHARS: usize = 250;

/// Closed set of post categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Fiction")]
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fiction => "Fiction",
            Self::NonFiction => "Non-Fiction",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        validate_category(value)
    }
}

/// Persisted post record as read back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub summary: String,
    pub category: Category,
    /// Unix epoch milliseconds, set once on insert.
    pub created_at: i64,
    /// Unix epoch milliseconds of the last update; `None` until first update.
    pub updated_at: Option<i64>,
}

pub fn validate_title(candidate: &str) -> ValidationResult<&str> {
    if candidate.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if !CLICKBAIT_KEYWORDS
        .iter()
        .any(|keyword| candidate.contains(keyword))
    {
        return Err(ValidationError::MissingClickbaitKeyword);
    }
    Ok(candidate)
}

pub fn validate_content(candidate: &str) -> ValidationResult<&str> {
    if candidate.chars().count() < MIN_CONTENT_CHARS {
        return Err(ValidationError::ContentTooShort);
    }
    Ok(candidate)
}

pub fn validate_summary(candidate: &str) -> ValidationResult<&str> {
    if candidate.chars().count() > MAX_SUMMARY_CHARS {
        return Err(ValidationError::SummaryTooLong);
    }
    Ok(candidate)
}

/// Accepts exactly `Fiction` or `Non-Fiction`; no trimming or case folding.
pub fn validate_category(candidate: &str) -> ValidationResult<Category> {
    match candidate {
        "Fiction" => Ok(Category::Fiction),
        "Non-Fiction" => Ok(Category::NonFiction),
        _ => Err(ValidationError::InvalidCategory),
    }
}

/// Validated input for creating a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    title: String,
    content: String,
    summary: String,
    category: Category,
}

impl NewPost {
    /// Runs every post validator and returns an insert-ready value.
    ///
    /// # Errors
    /// - Returns the first failing rule, checked in `title`, `content`,
    ///   `summary`, `category` order.
    pub fn validate(
        title: impl Into<String>,
        content: impl Into<String>,
        summary: impl Into<String>,
        category: &str,
    ) -> ValidationResult<Self> {
        let title = title.into();
        let content = content.into();
        let summary = summary.into();
        validate_title(&title)?;
        validate_content(&content)?;
        validate_summary(&summary)?;
        let category = validate_category(category)?;
        Ok(Self {
            title,
            content,
            summary,
            category,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

/// Unvalidated partial update for a post. `None` leaves a field as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub category: Option<String>,
}

impl PostPatch {
    /// Validates every present field; one failure rejects the whole patch.
    pub fn validate(self) -> ValidationResult<PostChanges> {
        if let Some(title) = self.title.as_deref() {
            validate_title(title)?;
        }
        if let Some(content) = self.content.as_deref() {
            validate_content(content)?;
        }
        if let Some(summary) = self.summary.as_deref() {
            validate_summary(summary)?;
        }
        let category = self
            .category
            .as_deref()
            .map(validate_category)
            .transpose()?;

        Ok(PostChanges {
            title: self.title,
            content: self.content,
            summary: self.summary,
            category,
        })
    }
}

/// Validated partial update for a post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    title: Option<String>,
    content: Option<String>,
    summary: Option<String>,
    category: Option<Category>,
}

impl PostChanges {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Returns whether no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.summary.is_none()
            && self.category.is_none()
    }
}
