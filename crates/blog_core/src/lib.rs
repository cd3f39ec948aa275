//! Core domain logic for the blog backend: author and post records, their
//! field validators, and SQLite-backed storage.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::author::{
    validate_name, validate_phone_number, Author, AuthorChanges, AuthorId, AuthorPatch, NewAuthor,
};
pub use model::error::{ValidationError, ValidationResult};
pub use model::post::{
    validate_category, validate_content, validate_summary, validate_title, Category, NewPost,
    Post, PostChanges, PostId, PostPatch, CLICKBAIT_KEYWORDS,
};
pub use repo::author_repo::{AuthorRepository, SqliteAuthorRepository};
pub use repo::post_repo::{PostRepository, SqlitePostRepository};
pub use repo::{RepoError, RepoResult};
pub use service::author_service::AuthorService;
pub use service::post_service::{CreatePostRequest, PostService};
