use serde::{Deserialize, Serialize};

/// Who wrote a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Bot,
}

/// A single entry in the demo chat transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub author: Author,
    /// Set when the bot entry stands in for a failed exchange
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: new_message_id(),
            text: text.into(),
            author: Author::User,
            is_error: false,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            id: new_message_id(),
            text: text.into(),
            author: Author::Bot,
            is_error: false,
        }
    }

    /// Bot entry carrying the generic failure text
    pub fn bot_error(text: impl Into<String>) -> Self {
        Self {
            is_error: true,
            ..Self::bot(text)
        }
    }

    pub fn is_user(&self) -> bool {
        self.author == Author::User
    }

    pub fn is_bot(&self) -> bool {
        self.author == Author::Bot
    }
}

fn new_message_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
