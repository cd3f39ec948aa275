//! Post use-case service.

use super::log_rejection;
use crate::model::post::{NewPost, Post, PostId, PostPatch};
use crate::repo::post_repo::PostRepository;
use crate::repo::RepoResult;
use log::info;

/// Request model for creating a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub summary: String,
    /// Must be exactly `Fiction` or `Non-Fiction`.
    pub category: String,
}

/// Use-case service wrapper for post operations.
pub struct PostService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> PostService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and stores a new post.
    pub fn create_post(&self, request: CreatePostRequest) -> RepoResult<PostId> {
        let post = NewPost::validate(
            request.title,
            request.content,
            request.summary,
            &request.category,
        )
        .inspect_err(|err| log_rejection("post_create", err))?;

        let id = self.repo.create_post(&post)?;
        info!("event=post_create module=service status=ok post_id={id}");
        Ok(id)
    }

    pub fn get_post(&self, id: PostId) -> RepoResult<Option<Post>> {
        self.repo.get_post(id)
    }

    pub fn list_posts(&self) -> RepoResult<Vec<Post>> {
        self.repo.list_posts()
    }

    /// Validates present patch fields and applies them.
    ///
    /// Returns repository-level not-found errors unchanged.
    pub fn update_post(&self, id: PostId, patch: PostPatch) -> RepoResult<()> {
        let changes = patch
            .validate()
            .inspect_err(|err| log_rejection("post_update", err))?;

        self.repo.update_post(id, &changes)?;
        info!("event=post_update module=service status=ok post_id={id}");
        Ok(())
    }

    pub fn delete_post(&self, id: PostId) -> RepoResult<()> {
        self.repo.delete_post(id)?;
        info!("event=post_delete module=service status=ok post_id={id}");
        Ok(())
    }
}
