//! SQLite-backed durable slots.

use super::{ensure_slot_name, SlotStorage, StorageResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Durable slot storage on a migrated connection (see `crate::db::open_db`).
#[derive(Clone, Copy)]
pub struct SqliteSlotStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotStorage<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SlotStorage for SqliteSlotStorage<'_> {
    fn read_slot(&self, name: &str) -> StorageResult<Option<String>> {
        ensure_slot_name(name)?;
        let payload = self
            .conn
            .query_row(
                "SELECT payload FROM slots WHERE name = ?1;",
                [name],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(payload)
    }

    fn write_slot(&self, name: &str, payload: &str) -> StorageResult<()> {
        ensure_slot_name(name)?;
        self.conn.execute(
            "INSERT INTO slots (name, payload, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(name) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![name, payload],
        )?;
        Ok(())
    }

    fn remove_slot(&self, name: &str) -> StorageResult<()> {
        ensure_slot_name(name)?;
        self.conn
            .execute("DELETE FROM slots WHERE name = ?1;", [name])?;
        Ok(())
    }
}
