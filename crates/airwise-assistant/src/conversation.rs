//! Conversation log types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Assistant,
}

/// A single message in the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub author: Author,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Author::User)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(text, Author::Assistant)
    }

    fn new(text: impl Into<String>, author: Author) -> Self {
        Self {
            text: text.into(),
            author,
            timestamp: Utc::now(),
        }
    }
}

/// Append-only message log plus the composing flag
#[derive(Debug, Clone, Default)]
pub struct ConversationState {
    messages: Vec<ChatMessage>,
    composing: bool,
}

impl ConversationState {
    /// Log seeded with one assistant greeting
    pub fn with_greeting(greeting: &str) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(greeting)],
            composing: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    /// Record the user's message and enter the composing state
    pub(crate) fn begin_turn(&mut self, text: &str) {
        self.messages.push(ChatMessage::user(text));
        self.composing = true;
    }

    /// Record the reply and return to idle
    pub(crate) fn finish_turn(&mut self, reply: String) {
        self.messages.push(ChatMessage::assistant(reply));
        self.composing = false;
    }
}
