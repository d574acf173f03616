use std::sync::Arc;

use anyhow::Result;
use rusqlite::{Connection, Row};
use tracing::debug;

use crate::models::MessageRow;
use crate::{Database, OptionalExt, error};

const SELECT_MESSAGE: &str =
    "SELECT message_id, posted_by, message_text, time_posted_epoch FROM message";

/// Queries against the `message` table.
#[derive(Clone)]
pub struct MessageStore {
    db: Arc<Database>,
}

impl MessageStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Insert a message and return it with its generated id.
    /// An unknown `posted_by` surfaces as [`StoreError::UnknownAccount`](crate::StoreError).
    pub fn create(&self, posted_by: i32, text: &str, time_posted_epoch: i64) -> Result<MessageRow> {
        let row = self.db.with_conn(|conn| {
            conn.query_row(
                "INSERT INTO message (posted_by, message_text, time_posted_epoch) VALUES (?1, ?2, ?3)
                 RETURNING message_id, posted_by, message_text, time_posted_epoch",
                rusqlite::params![posted_by, text, time_posted_epoch],
                message_from_row,
            )
            .map_err(error::classify)
        })?;

        debug!("Created message {} for account {}", row.message_id, row.posted_by);
        Ok(row)
    }

    pub fn list_all(&self) -> Result<Vec<MessageRow>> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("{SELECT_MESSAGE} ORDER BY message_id"))?;
            let rows = stmt
                .query_map([], message_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn find_by_id(&self, id: i32) -> Result<Option<MessageRow>> {
        self.db.with_conn(|conn| query_message_by_id(conn, id))
    }

    /// Returns true iff a row was removed.
    pub fn delete_by_id(&self, id: i32) -> Result<bool> {
        let removed = self
            .db
            .with_conn(|conn| Ok(conn.execute("DELETE FROM message WHERE message_id = ?1", [id])?))?;

        if removed > 0 {
            debug!("Deleted message {}", id);
        }
        Ok(removed > 0)
    }

    /// Overwrite the text and re-read the row. `None` when no message has that id.
    pub fn update_text(&self, id: i32, text: &str) -> Result<Option<MessageRow>> {
        self.db.with_conn(|conn| {
            conn.execute(
                "UPDATE message SET message_text = ?1 WHERE message_id = ?2",
                rusqlite::params![text, id],
            )?;
            query_message_by_id(conn, id)
        })
    }

    pub fn list_by_posted_by(&self, account_id: i32) -> Result<Vec<MessageRow>> {
        self.db.with_conn(|conn| {
            let mut stmt =
                conn.prepare(&format!("{SELECT_MESSAGE} WHERE posted_by = ?1 ORDER BY message_id"))?;
            let rows = stmt
                .query_map([account_id], message_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }
}

fn message_from_row(row: &Row<'_>) -> rusqlite::Result<MessageRow> {
    Ok(MessageRow {
        message_id: row.get(0)?,
        posted_by: row.get(1)?,
        message_text: row.get(2)?,
        time_posted_epoch: row.get(3)?,
    })
}

fn query_message_by_id(conn: &Connection, id: i32) -> Result<Option<MessageRow>> {
    let mut stmt = conn.prepare(&format!("{SELECT_MESSAGE} WHERE message_id = ?1"))?;

    stmt.query_row([id], message_from_row).optional()
}
