//! Schema bootstrap for the snippets table.
//!
//! Creation is idempotent and runs on every startup. Tables created by
//! earlier revisions lack the `language` column; it is added in place.

use rusqlite::Connection;

pub(crate) fn ensure(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS snippets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL CHECK(length(title) > 0),
            description TEXT,
            tags TEXT,
            code TEXT NOT NULL CHECK(length(code) > 0),
            language TEXT
        )",
        [],
    )?;

    if !has_column(conn, "snippets", "language")? {
        log::debug!("adding language column to existing snippets table");
        conn.execute("ALTER TABLE snippets ADD COLUMN language TEXT", [])?;
    }

    Ok(())
}

fn has_column(conn: &Connection, table: &str, column: &str) -> rusqlite::Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1)")?;
    let names = stmt
        .query_map([table], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(names.iter().any(|name| name == column))
}
