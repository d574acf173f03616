use std::sync::Arc;

use chirp_db::{AccountStore, Database, MessageStore};

use crate::service::{AccountService, MessageService};

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub accounts: AccountService,
    pub messages: MessageService,
}

impl AppStateInner {
    /// Wire both stores and services onto one database handle.
    pub fn new(db: Arc<Database>) -> AppState {
        Arc::new(Self {
            accounts: AccountService::new(AccountStore::new(db.clone())),
            messages: MessageService::new(MessageStore::new(db.clone()), AccountStore::new(db)),
        })
    }
}
