use serde::Deserialize;

// -- Accounts --

/// Body of `/register` and `/login`. Missing fields decode as empty strings
/// so they fail validation instead of JSON extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// -- Messages --

/// Body of `POST /messages`. Clients may echo a `message_id`; it is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct NewMessage {
    pub posted_by: i32,
    #[serde(default)]
    pub message_text: String,
    pub time_posted_epoch: i64,
}

/// Body of `PATCH /messages/{message_id}`. Only the text is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMessage {
    #[serde(default)]
    pub message_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_missing_fields_are_empty() {
        let creds: Credentials = serde_json::from_str(r#"{"username":"alice"}"#).unwrap();
        assert_eq!(creds.username, "alice");
        assert!(creds.password.is_empty());
    }

    #[test]
    fn new_message_ignores_client_message_id() {
        let msg: NewMessage = serde_json::from_str(
            r#"{"message_id":99,"posted_by":1,"message_text":"hello","time_posted_epoch":1000}"#,
        )
        .unwrap();
        assert_eq!(msg.posted_by, 1);
        assert_eq!(msg.message_text, "hello");
        assert_eq!(msg.time_posted_epoch, 1000);
    }

    #[test]
    fn update_message_accepts_full_message_body() {
        let upd: UpdateMessage = serde_json::from_str(
            r#"{"message_id":1,"posted_by":2,"message_text":"hi","time_posted_epoch":5}"#,
        )
        .unwrap();
        assert_eq!(upd.message_text, "hi");
    }
}
