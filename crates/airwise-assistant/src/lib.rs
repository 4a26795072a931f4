//! Rule-based air-quality assistant

mod assistant;
mod conversation;
mod intent;
mod reply;

pub use assistant::{Assistant, GREETING};
pub use conversation::{Author, ChatMessage, ConversationState};
pub use intent::{classify_intent, Intent};
pub use reply::{compose_reply, NO_DATA_REPLY};
