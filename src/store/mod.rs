//! SQLite snippet storage.
//!
//! Persists snippets to a single local database file with one table:
//! - snippets: id, title, description, tags, code, language
//!
//! Supports:
//! - Create with store-assigned ids
//! - Lookup by id, full listing, keyword search
//! - In-place update by id
//!
//! Every read goes straight to the database; there is no cache.

mod schema;

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Error, Result};
use crate::snippet::Snippet;

const SELECT_COLUMNS: &str = "SELECT id, title, description, tags, code, language FROM snippets";

/// Open `path` (creating the file if absent) and make sure the table exists.
/// Safe to call on every startup.
pub fn init_schema(path: &Path) -> Result<()> {
    let conn = Connection::open(path)?;
    schema::ensure(&conn)?;
    close_connection(conn)
}

/// Database handle. Open once per command, pass it to the manager.
/// Dropping the handle releases the connection.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        log::debug!("opening snippet store at {}", path.display());
        let conn = Connection::open(path)?;
        schema::ensure(&conn)?;
        Ok(Store { conn })
    }

    /// Private in-memory database, schema applied.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::ensure(&conn)?;
        Ok(Store { conn })
    }

    pub fn close(self) -> Result<()> {
        close_connection(self.conn)
    }

    /// Insert a new row and return its id. `snippet.id` is ignored.
    pub fn create(&self, snippet: &Snippet) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO snippets (title, description, tags, code, language)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                snippet.title,
                snippet.description,
                snippet.tags,
                snippet.code,
                snippet.language
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        log::debug!("created snippet {id}");
        Ok(id)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Snippet> {
        let mut stmt = self
            .conn
            .prepare_cached(&format!("{SELECT_COLUMNS} WHERE id = ?1"))?;

        stmt.query_row(params![id], snippet_from_row)
            .optional()?
            .ok_or(Error::NotFound(id))
    }

    /// Snippets whose title, description or tags contain `keyword`.
    ///
    /// Matching is a case-sensitive literal substring test; the keyword is
    /// bound as a parameter, so quotes, `%` and `_` carry no meaning. An empty
    /// keyword matches every row.
    pub fn search(&self, keyword: &str) -> Result<Vec<Snippet>> {
        let mut stmt = self.conn.prepare_cached(&format!(
            "{SELECT_COLUMNS}
             WHERE instr(title, ?1) > 0
                OR instr(COALESCE(description, ''), ?1) > 0
                OR instr(COALESCE(tags, ''), ?1) > 0
             ORDER BY id"
        ))?;

        let snippets = stmt
            .query_map(params![keyword], snippet_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        log::debug!("search {keyword:?} matched {} snippets", snippets.len());
        Ok(snippets)
    }

    pub fn get_all(&self) -> Result<Vec<Snippet>> {
        let mut stmt = self
            .conn
            .prepare_cached(&format!("{SELECT_COLUMNS} ORDER BY id"))?;

        let snippets = stmt
            .query_map([], snippet_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(snippets)
    }

    /// Overwrite every mutable field of row `id`.
    pub fn update(&self, id: i64, snippet: &Snippet) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE snippets
             SET title = ?1, description = ?2, tags = ?3, code = ?4, language = ?5
             WHERE id = ?6",
            params![
                snippet.title,
                snippet.description,
                snippet.tags,
                snippet.code,
                snippet.language,
                id
            ],
        )?;

        if changed == 0 {
            return Err(Error::NotFound(id));
        }

        log::debug!("updated snippet {id}");
        Ok(())
    }
}

fn close_connection(conn: Connection) -> Result<()> {
    conn.close().map_err(|(_, err)| Error::from(err))
}

// rows written by earlier revisions may hold NULL in the optional columns
fn snippet_from_row(row: &rusqlite::Row) -> rusqlite::Result<Snippet> {
    Ok(Snippet {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        tags: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        code: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        language: row.get(5)?,
    })
}
