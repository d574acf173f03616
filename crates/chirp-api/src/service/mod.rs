//! Validation and existence rules applied before anything reaches storage.
//! Services are synchronous; handlers run them through `spawn_blocking`.

pub mod accounts;
pub mod messages;

pub use accounts::AccountService;
pub use messages::MessageService;
