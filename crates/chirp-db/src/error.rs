use thiserror::Error;

/// Constraint failures a caller can act on. Carried inside `anyhow::Error`
/// and recovered with `downcast_ref`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("username already taken")]
    Conflict,

    #[error("posted_by does not reference an account")]
    UnknownAccount,
}

/// Maps the SQLite constraint failures the stores care about to `StoreError`,
/// passing everything else through untouched.
pub(crate) fn classify(err: rusqlite::Error) -> anyhow::Error {
    if let rusqlite::Error::SqliteFailure(ffi_err, _) = &err {
        match ffi_err.extended_code {
            rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE => return StoreError::Conflict.into(),
            rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY => return StoreError::UnknownAccount.into(),
            _ => {}
        }
    }
    err.into()
}
