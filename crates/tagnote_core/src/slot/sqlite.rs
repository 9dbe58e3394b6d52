//! SQLite slot backend.
//!
//! # Responsibility
//! - Persist raw slot values in the `slots` table, one row per key.
//!
//! # Invariants
//! - `save` is an upsert of the full value; `updated_at` tracks the last write.
//! - Construction fails fast when the connection is not migrated.

use super::{SlotError, SlotResult, SlotStore};
use rusqlite::{params, Connection, OptionalExtension};

/// Slot backend over a migrated SQLite connection.
///
/// Holds a shared borrow so the notes and tags slots can use one connection.
#[derive(Debug, Clone, Copy)]
pub struct SqliteSlotStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotStore<'conn> {
    /// Constructs a backend from a connection returned by `db::open_db*`.
    pub fn try_new(conn: &'conn Connection) -> SlotResult<Self> {
        ensure_slot_table_ready(conn)?;
        Ok(Self { conn })
    }
}

impl SlotStore for SqliteSlotStore<'_> {
    fn load(&self, key: &str) -> SlotResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM slots WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn save(&self, key: &str, value: &str) -> SlotResult<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}

fn ensure_slot_table_ready(conn: &Connection) -> SlotResult<()> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = 'slots'
        );",
        [],
        |row| row.get(0),
    )?;
    if exists != 1 {
        return Err(SlotError::MissingRequiredTable("slots"));
    }

    let mut stmt = conn.prepare("PRAGMA table_info(slots);")?;
    let mut rows = stmt.query([])?;
    let mut columns = Vec::new();
    while let Some(row) = rows.next()? {
        columns.push(row.get::<_, String>(1)?);
    }
    for column in ["key", "value", "updated_at"] {
        if !columns.iter().any(|current| current == column) {
            return Err(SlotError::MissingRequiredColumn {
                table: "slots",
                column,
            });
        }
    }

    Ok(())
}
