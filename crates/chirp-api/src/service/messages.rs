use chirp_db::{AccountStore, MessageStore};
use chirp_types::MAX_MESSAGE_LEN;
use chirp_types::api::NewMessage;
use chirp_types::models::Message;
use tracing::debug;

use crate::error::ServiceError;

#[derive(Clone)]
pub struct MessageService {
    store: MessageStore,
    accounts: AccountStore,
}

fn validate_text(text: &str) -> Result<(), ServiceError> {
    if text.is_empty() {
        return Err(ServiceError::Validation("message text must not be empty"));
    }
    if text.chars().count() > MAX_MESSAGE_LEN {
        return Err(ServiceError::Validation("message text too long"));
    }
    Ok(())
}

impl MessageService {
    pub fn new(store: MessageStore, accounts: AccountStore) -> Self {
        Self { store, accounts }
    }

    /// Create a message. The text must be 1..=255 characters and
    /// `posted_by` must name an existing account.
    pub fn create(&self, msg: &NewMessage) -> Result<Message, ServiceError> {
        validate_text(&msg.message_text)?;

        if self.accounts.find_by_id(msg.posted_by)?.is_none() {
            debug!("Create rejected, account {} not found", msg.posted_by);
            return Err(ServiceError::Validation("posted_by does not reference an account"));
        }

        // The foreign key still catches an account that vanishes in between.
        let row = self
            .store
            .create(msg.posted_by, &msg.message_text, msg.time_posted_epoch)
            .map_err(ServiceError::from_store)?;

        Ok(row.into())
    }

    pub fn list_all(&self) -> Result<Vec<Message>, ServiceError> {
        Ok(self.store.list_all()?.into_iter().map(Message::from).collect())
    }

    pub fn find_by_id(&self, id: i32) -> Result<Option<Message>, ServiceError> {
        Ok(self.store.find_by_id(id)?.map(Message::from))
    }

    pub fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.store.delete_by_id(id)?)
    }

    /// Replace the text of an existing message; everything else is kept.
    pub fn update(&self, id: i32, text: &str) -> Result<Message, ServiceError> {
        validate_text(text)?;

        if self.store.find_by_id(id)?.is_none() {
            debug!("Update rejected, message {} not found", id);
            return Err(ServiceError::NotFound);
        }

        // A concurrent delete between the lookup and the write also lands here.
        self.store
            .update_text(id, text)?
            .map(Message::from)
            .ok_or(ServiceError::NotFound)
    }

    pub fn list_by_posted_by(&self, account_id: i32) -> Result<Vec<Message>, ServiceError> {
        Ok(self
            .store
            .list_by_posted_by(account_id)?
            .into_iter()
            .map(Message::from)
            .collect())
    }
}
