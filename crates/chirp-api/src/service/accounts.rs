use chirp_db::AccountStore;
use chirp_types::MIN_PASSWORD_LEN;
use chirp_types::api::Credentials;
use chirp_types::models::Account;
use tracing::{debug, info};

use crate::error::ServiceError;

#[derive(Clone)]
pub struct AccountService {
    store: AccountStore,
}

impl AccountService {
    pub fn new(store: AccountStore) -> Self {
        Self { store }
    }

    /// Register a new account.
    ///
    /// Rejects an empty username, a password shorter than
    /// [`MIN_PASSWORD_LEN`] characters, and a username that is already
    /// taken. Two concurrent registrations of the same name both pass the
    /// lookup; the loser is caught by the unique constraint and also
    /// reported as [`ServiceError::Conflict`].
    pub fn register(&self, creds: &Credentials) -> Result<Account, ServiceError> {
        if creds.username.is_empty() {
            return Err(ServiceError::Validation("username must not be empty"));
        }
        if creds.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ServiceError::Validation("password too short"));
        }

        if self.store.find_by_username(&creds.username)?.is_some() {
            debug!("Registration rejected, username '{}' taken", creds.username);
            return Err(ServiceError::Conflict);
        }

        self.insert(creds)
    }

    /// Insert without the lookup. A name taken since the lookup is reported
    /// by the unique constraint.
    fn insert(&self, creds: &Credentials) -> Result<Account, ServiceError> {
        let row = self
            .store
            .create(&creds.username, &creds.password)
            .map_err(ServiceError::from_store)?;

        info!("Registered account {} ({})", row.account_id, row.username);
        Ok(row.into_account(&creds.password))
    }

    pub fn login(&self, creds: &Credentials) -> Result<Account, ServiceError> {
        self.store
            .find_by_credentials(&creds.username, &creds.password)?
            .map(|row| row.into_account(&creds.password))
            .ok_or(ServiceError::Unauthorized)
    }

    pub fn exists(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.store.find_by_id(id)?.is_some())
    }
}
