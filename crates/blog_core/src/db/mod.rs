//! SQLite storage bootstrap for blog records.
//!
//! # Responsibility
//! - Open and configure SQLite connections.
//! - Ensure the `authors` and `posts` tables exist before use.
//!
//! # Invariants
//! - Table creation is idempotent (`CREATE TABLE IF NOT EXISTS`).
//! - Callers must not read/write records before bootstrap succeeds.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;

pub use open::{open_db, open_db_in_memory};

/// Tables every repository requires.
pub const REQUIRED_TABLES: [&str; 2] = ["authors", "posts"];

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
