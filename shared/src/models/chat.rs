//! Chat assistant wire types

use serde::{Deserialize, Serialize};

/// Fallback text shown when the assistant cannot be reached
pub const CHAT_FALLBACK_ANSWER: &str = "Sorry, I could not fetch an answer right now.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub from: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            from: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            from: ChatRole::Bot,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_wire_shape() {
        let json = serde_json::to_string(&ChatMessage::user("hi")).unwrap();
        assert_eq!(json, r#"{"from":"user","text":"hi"}"#);
    }

    #[test]
    fn test_response_without_suggestions() {
        let resp: ChatResponse = serde_json::from_str(r#"{"answer":"ok"}"#).unwrap();
        assert_eq!(resp.answer, "ok");
        assert!(resp.suggestions.is_none());
    }
}
