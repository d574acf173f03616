pub mod api;
pub mod models;

/// Shortest password accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 4;

/// Longest message text accepted, counted in characters.
pub const MAX_MESSAGE_LEN: usize = 255;
