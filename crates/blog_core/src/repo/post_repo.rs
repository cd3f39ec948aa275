//! Post repository contract and SQLite implementation.
//!
//! # Invariants
//! - Read paths reject stored categories outside the closed set instead of
//!   masking them.

use super::{ensure_table_exists, row_exists, RepoError, RepoResult};
use crate::model::post::{validate_category, NewPost, Post, PostChanges, PostId};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const POST_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    summary,
    category,
    created_at,
    updated_at
FROM posts";

/// Storage contract for post records.
pub trait PostRepository {
    fn create_post(&self, post: &NewPost) -> RepoResult<PostId>;
    fn get_post(&self, id: PostId) -> RepoResult<Option<Post>>;
    fn list_posts(&self) -> RepoResult<Vec<Post>>;
    fn update_post(&self, id: PostId, changes: &PostChanges) -> RepoResult<()>;
    fn delete_post(&self, id: PostId) -> RepoResult<()>;
}

/// SQLite-backed post repository.
pub struct SqlitePostRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePostRepository<'conn> {
    /// Constructs a repository from a bootstrapped connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_exists(conn, "posts")?;
        Ok(Self { conn })
    }
}

impl PostRepository for SqlitePostRepository<'_> {
    fn create_post(&self, post: &NewPost) -> RepoResult<PostId> {
        self.conn.execute(
            "INSERT INTO posts (title, content, summary, category) VALUES (?1, ?2, ?3, ?4);",
            params![
                post.title(),
                post.content(),
                post.summary(),
                post.category().as_str(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_post(&self, id: PostId) -> RepoResult<Option<Post>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{POST_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_post_row(row)?));
        }
        Ok(None)
    }

    fn list_posts(&self) -> RepoResult<Vec<Post>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{POST_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut posts = Vec::new();
        while let Some(row) = rows.next()? {
            posts.push(parse_post_row(row)?);
        }
        Ok(posts)
    }

    fn update_post(&self, id: PostId, changes: &PostChanges) -> RepoResult<()> {
        if changes.is_empty() {
            return if row_exists(self.conn, "posts", id)? {
                Ok(())
            } else {
                Err(not_found(id))
            };
        }

        let mut assignments = Vec::new();
        let mut bind_values: Vec<Value> = Vec::new();
        let text_fields = [
            ("title", changes.title()),
            ("content", changes.content()),
            ("summary", changes.summary()),
            ("category", changes.category().map(|category| category.as_str())),
        ];
        for (column, value) in text_fields {
            if let Some(value) = value {
                assignments.push(format!("{column} = ?"));
                bind_values.push(Value::Text(value.to_string()));
            }
        }
        bind_values.push(Value::Integer(id));

        let sql = format!(
            "UPDATE posts
             SET {}, updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?;",
            assignments.join(", ")
        );
        let changed = self.conn.execute(&sql, params_from_iter(bind_values))?;

        if changed == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    fn delete_post(&self, id: PostId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM posts WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}

fn not_found(id: PostId) -> RepoError {
    RepoError::NotFound { entity: "post", id }
}

fn parse_post_row(row: &Row<'_>) -> RepoResult<Post> {
    let category_text: String = row.get("category")?;
    let category = validate_category(&category_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid category `{category_text}` in posts.category"
        ))
    })?;

    Ok(Post {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get("content")?,
        summary: row.get("summary")?,
        category,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
