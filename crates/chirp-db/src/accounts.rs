use std::sync::Arc;

use anyhow::Result;
use rusqlite::{Connection, Row};
use tracing::debug;

use crate::models::AccountRow;
use crate::{Database, OptionalExt, error, password};

/// Queries against the `account` table.
#[derive(Clone)]
pub struct AccountStore {
    db: Arc<Database>,
}

impl AccountStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Insert a new account and return it with its generated id.
    ///
    /// The password is hashed before the row lock is taken. A duplicate
    /// username surfaces as [`StoreError::Conflict`](crate::StoreError).
    pub fn create(&self, username: &str, password: &str) -> Result<AccountRow> {
        let hashed = password::hash(password)?;

        let row = self.db.with_conn(|conn| {
            conn.query_row(
                "INSERT INTO account (username, password) VALUES (?1, ?2)
                 RETURNING account_id, username, password",
                (username, &hashed),
                account_from_row,
            )
            .map_err(error::classify)
        })?;

        debug!("Created account {} ({})", row.account_id, row.username);
        Ok(row)
    }

    /// Returns the account only when both username and password match.
    pub fn find_by_credentials(&self, username: &str, password: &str) -> Result<Option<AccountRow>> {
        let Some(row) = self.find_by_username(username)? else {
            return Ok(None);
        };

        if password::verify(password, &row.password)? {
            Ok(Some(row))
        } else {
            Ok(None)
        }
    }

    pub fn find_by_username(&self, username: &str) -> Result<Option<AccountRow>> {
        self.db.with_conn(|conn| query_account_by_username(conn, username))
    }

    pub fn find_by_id(&self, id: i32) -> Result<Option<AccountRow>> {
        self.db.with_conn(|conn| query_account_by_id(conn, id))
    }
}

fn account_from_row(row: &Row<'_>) -> rusqlite::Result<AccountRow> {
    Ok(AccountRow {
        account_id: row.get(0)?,
        username: row.get(1)?,
        password: row.get(2)?,
    })
}

fn query_account_by_username(conn: &Connection, username: &str) -> Result<Option<AccountRow>> {
    let mut stmt =
        conn.prepare("SELECT account_id, username, password FROM account WHERE username = ?1")?;

    stmt.query_row([username], account_from_row).optional()
}

fn query_account_by_id(conn: &Connection, id: i32) -> Result<Option<AccountRow>> {
    let mut stmt =
        conn.prepare("SELECT account_id, username, password FROM account WHERE account_id = ?1")?;

    stmt.query_row([id], account_from_row).optional()
}
