//! Question response DTOs

use serde::{Deserialize, Serialize};

use crate::constants::messages;

/// Fixed status message body. Question payloads never carry a top-level
/// `message` field, so these stay distinguishable from domain responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn ok() -> Self {
        Self::new(messages::OK)
    }

    pub fn invalid() -> Self {
        Self::new(messages::INVALID)
    }

    pub fn unauthorized() -> Self {
        Self::new(messages::UNAUTHORIZED)
    }

    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_bodies() {
        assert_eq!(
            serde_json::to_value(MessageResponse::ok()).unwrap(),
            serde_json::json!({ "message": "ok" })
        );
        assert_eq!(
            serde_json::to_value(MessageResponse::unauthorized()).unwrap(),
            serde_json::json!({ "message": "unauthorized" })
        );
    }
}
