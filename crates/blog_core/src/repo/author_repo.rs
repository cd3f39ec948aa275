//! Author repository contract and SQLite implementation.
//!
//! # Invariants
//! - `list_author_names` is a fresh read on every call; nothing is cached.
//! - `authors.name` carries a `UNIQUE` constraint, so a writer that loses the
//!   validate-then-insert race gets `RepoError::Db`, not a validation error.

use super::{ensure_table_exists, row_exists, RepoError, RepoResult};
use crate::model::author::{Author, AuthorChanges, AuthorId, NewAuthor};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::collections::BTreeSet;

const AUTHOR_SELECT_SQL: &str = "SELECT
    id,
    name,
    phone_number,
    created_at,
    updated_at
FROM authors";

/// Storage contract for author records.
pub trait AuthorRepository {
    /// Inserts a validated author and returns the storage-assigned id.
    fn create_author(&self, author: &NewAuthor) -> RepoResult<AuthorId>;
    /// Gets one author by id; `None` when missing.
    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>>;
    /// Lists all authors ordered by id.
    fn list_authors(&self) -> RepoResult<Vec<Author>>;
    /// Returns every stored author name, read at call time.
    fn list_author_names(&self) -> RepoResult<BTreeSet<String>>;
    /// Applies validated changes and stamps `updated_at`.
    fn update_author(&self, id: AuthorId, changes: &AuthorChanges) -> RepoResult<()>;
    /// Hard-deletes one author.
    fn delete_author(&self, id: AuthorId) -> RepoResult<()>;
}

/// SQLite-backed author repository.
pub struct SqliteAuthorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAuthorRepository<'conn> {
    /// Constructs a repository from a bootstrapped connection.
    ///
    /// # Errors
    /// - `MissingRequiredTable("authors")` when the schema is absent.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_exists(conn, "authors")?;
        Ok(Self { conn })
    }
}

impl AuthorRepository for SqliteAuthorRepository<'_> {
    fn create_author(&self, author: &NewAuthor) -> RepoResult<AuthorId> {
        self.conn.execute(
            "INSERT INTO authors (name, phone_number) VALUES (?1, ?2);",
            params![author.name(), author.phone_number()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{AUTHOR_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_author_row(row)?));
        }
        Ok(None)
    }

    fn list_authors(&self) -> RepoResult<Vec<Author>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{AUTHOR_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut authors = Vec::new();
        while let Some(row) = rows.next()? {
            authors.push(parse_author_row(row)?);
        }
        Ok(authors)
    }

    fn list_author_names(&self) -> RepoResult<BTreeSet<String>> {
        let mut stmt = self.conn.prepare("SELECT name FROM authors;")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(names)
    }

    fn update_author(&self, id: AuthorId, changes: &AuthorChanges) -> RepoResult<()> {
        if changes.is_empty() {
            return ensure_author_exists(self.conn, id);
        }

        let mut assignments = Vec::new();
        let mut bind_values: Vec<Value> = Vec::new();
        if let Some(name) = changes.name() {
            assignments.push("name = ?");
            bind_values.push(Value::Text(name.to_string()));
        }
        if let Some(phone_number) = changes.phone_number() {
            assignments.push("phone_number = ?");
            bind_values.push(Value::Text(phone_number.to_string()));
        }
        bind_values.push(Value::Integer(id));

        let sql = format!(
            "UPDATE authors
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

    fn delete_author(&self, id: AuthorId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM authors WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}

fn ensure_author_exists(conn: &Connection, id: AuthorId) -> RepoResult<()> {
    if row_exists(conn, "authors", id)? {
        Ok(())
    } else {
        Err(not_found(id))
    }
}

fn not_found(id: AuthorId) -> RepoError {
    RepoError::NotFound {
        entity: "author",
        id,
    }
}

fn parse_author_row(row: &Row<'_>) -> RepoResult<Author> {
    Ok(Author {
        id: row.get("id")?,
        name: row.get("name")?,
        phone_number: row.get("phone_number")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
