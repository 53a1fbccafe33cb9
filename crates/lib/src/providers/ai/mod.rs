pub mod openai;

use crate::{
    errors::ChatError,
    types::{ChatMessage, Role},
};
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

pub use openai::{ChatConfig, FallbackMessages, OpenAiProvider};

/// A trait for hosted chat-completion services.
///
/// One call is one request/response exchange: no streaming, no retry, no
/// memory between calls. Implementations hold no shared mutable state, so
/// concurrent calls are safe but complete in no particular order.
#[async_trait]
pub trait ChatProvider: Send + Sync + Debug + DynClone {
    /// Sends the ordered message list and returns the assistant's reply text.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ChatError>;
}

dyn_clone::clone_trait_object!(ChatProvider);

/// Checks the ordering rules of a chat-completion message list: it must be
/// non-empty and hold at most one `system` message, in first position.
pub fn validate_messages(messages: &[ChatMessage]) -> Result<(), ChatError> {
    if messages.is_empty() {
        return Err(ChatError::InvalidRequest(
            "at least one message is required".to_string(),
        ));
    }

    let system_positions: Vec<usize> = messages
        .iter()
        .enumerate()
        .filter(|(_, m)| m.role == Role::System)
        .map(|(i, _)| i)
        .collect();

    match system_positions.as_slice() {
        [] | [0] => Ok(()),
        [_] => Err(ChatError::InvalidRequest(
            "the system message must come first".to_string(),
        )),
        _ => Err(ChatError::InvalidRequest(
            "only one system message is allowed".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_leading_system_message() {
        let messages = vec![ChatMessage::system("rules"), ChatMessage::user("hi")];
        assert!(validate_messages(&messages).is_ok());
    }

    #[test]
    fn accepts_history_without_system_message() {
        let messages = vec![ChatMessage::user("hi"), ChatMessage::assistant("hello")];
        assert!(validate_messages(&messages).is_ok());
    }

    #[test]
    fn rejects_empty_and_misplaced_system_messages() {
        assert!(matches!(
            validate_messages(&[]),
            Err(ChatError::InvalidRequest(_))
        ));
        let late = vec![ChatMessage::user("hi"), ChatMessage::system("rules")];
        assert!(matches!(
            validate_messages(&late),
            Err(ChatError::InvalidRequest(msg)) if msg.contains("first")
        ));
        let twice = vec![ChatMessage::system("a"), ChatMessage::system("b")];
        assert!(matches!(
            validate_messages(&twice),
            Err(ChatError::InvalidRequest(msg)) if msg.contains("only one")
        ));
    }
}
