//! Author use-case service.
//!
//! # Invariants
//! - Name uniqueness is checked against a fresh `list_author_names` read on
//!   every create/rename. Concurrent writers may both pass the check; see
//!   `repo::author_repo` for the storage backstop.
//! - On rename, the target author's own current name does not count as taken.

use super::log_rejection;
use crate::model::author::{Author, AuthorId, AuthorPatch, NewAuthor};
use crate::repo::author_repo::AuthorRepository;
use crate::repo::{RepoError, RepoResult};
use log::info;

/// Use-case service wrapper for author operations.
pub struct AuthorService<R: AuthorRepository> {
    repo: R,
}

impl<R: AuthorRepository> AuthorService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and stores a new author.
    ///
    /// # Errors
    /// - `RepoError::Validation` when a field rule fails; nothing is stored.
    pub fn create_author(
        &self,
        name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> RepoResult<AuthorId> {
        let existing_names = self.repo.list_author_names()?;
        let author = NewAuthor::validate(name, phone_number, &existing_names)
            .inspect_err(|err| log_rejection("author_create", err))?;

        let id = self.repo.create_author(&author)?;
        info!("event=author_create module=service status=ok author_id={id}");
        Ok(id)
    }

    pub fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        self.repo.get_author(id)
    }

    pub fn list_authors(&self) -> RepoResult<Vec<Author>> {
        self.repo.list_authors()
    }

    /// Validates present patch fields and applies them.
    ///
    /// A rejected patch leaves the stored author unchanged.
    pub fn update_author(&self, id: AuthorId, patch: AuthorPatch) -> RepoResult<()> {
        let current = self.repo.get_author(id)?.ok_or(RepoError::NotFound {
            entity: "author",
            id,
        })?;

        let mut other_names = self.repo.list_author_names()?;
        other_names.remove(&current.name);

        let changes = patch
            .validate(&other_names)
            .inspect_err(|err| log_rejection("author_update", err))?;

        self.repo.update_author(id, &changes)?;
        info!("event=author_update module=service status=ok author_id={id}");
        Ok(())
    }

    pub fn delete_author(&self, id: AuthorId) -> RepoResult<()> {
        self.repo.delete_author(id)?;
        info!("event=author_delete module=service status=ok author_id={id}");
        Ok(())
    }
}
