//! Database row types — these map directly to SQLite rows.
//! Distinct from chirp-types API models to keep the DB layer independent.

use chirp_types::models::{Account, Message};

#[derive(Debug)]
pub struct AccountRow {
    pub account_id: i32,
    pub username: String,
    /// Argon2id PHC string.
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRow {
    pub message_id: i32,
    pub posted_by: i32,
    pub message_text: String,
    pub time_posted_epoch: i64,
}

impl AccountRow {
    /// Wire form of the account. Carries the password the caller submitted,
    /// never the stored hash.
    pub fn into_account(self, password: &str) -> Account {
        Account {
            account_id: self.account_id,
            username: self.username,
            password: password.to_string(),
        }
    }
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Self {
            message_id: row.message_id,
            posted_by: row.posted_by,
            message_text: row.message_text,
            time_posted_epoch: row.time_posted_epoch,
        }
    }
}
