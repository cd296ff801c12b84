use serde::{Deserialize, Serialize};

/// Confirmation state of a chat account, owned by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserStatus {
    Confirmed,
    Pending,
    Blocked,
}

/// The authenticated session owner as returned by the user lookup endpoint.
///
/// Read-only on the client; only a `Confirmed` user gets past the loading
/// screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    #[serde(rename = "chatId")]
    pub chat_id: String,
    pub status: UserStatus,
}

impl User {
    pub fn is_confirmed(&self) -> bool {
        self.status == UserStatus::Confirmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_from_wire_json() {
        let json = r#"{"id":"u1","firstname":"Aziz","lastname":"Karimov","chatId":"7882316826","status":"CONFIRMED"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.chat_id, "7882316826");
        assert!(user.is_confirmed());
    }

    #[test]
    fn test_non_confirmed_statuses_are_rejected_by_the_gate() {
        for raw in ["\"PENDING\"", "\"BLOCKED\""] {
            let status: UserStatus = serde_json::from_str(raw).unwrap();
            assert_ne!(status, UserStatus::Confirmed);
        }
    }
}
