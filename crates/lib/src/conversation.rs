//! # Conversation State
//!
//! The caller-owned transcript and the assembly of the outgoing message list.
//! The library never keeps a transcript of its own: callers thread history
//! into every request explicitly.

use crate::types::{ChatMessage, ConversationTurn, TurnRole};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Assembles the chat-completion message list for a new question: the system
/// prompt, the prior turns in order, then the new user turn.
///
/// Error turns are transcript decorations and are never sent to the model.
pub fn build_messages(
    system_prompt: &str,
    history: &[ConversationTurn],
    question: &str,
) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::system(system_prompt));
    messages.extend(
        history
            .iter()
            .filter(|turn| !turn.is_error)
            .map(|turn| match turn.role {
                TurnRole::User => ChatMessage::user(turn.content.clone()),
                TurnRole::Assistant => ChatMessage::assistant(turn.content.clone()),
            }),
    );
    messages.push(ChatMessage::user(question));
    messages
}

/// A running transcript as a presentation layer would keep it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Conversation {
    turns: Vec<ConversationTurn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(ConversationTurn::user(content));
    }

    /// Appends the outcome of a chat call: the reply text, or an error turn
    /// holding the failure's user-facing message.
    pub fn record_reply<E: Display>(&mut self, result: Result<String, E>) -> &ConversationTurn {
        let turn = match result {
            Ok(text) => ConversationTurn::assistant(text),
            Err(e) => ConversationTurn::error(e.to_string()),
        };
        self.turns.push(turn);
        &self.turns[self.turns.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    #[test]
    fn messages_wrap_history_between_system_and_question() {
        let history = vec![
            ConversationTurn::user("first"),
            ConversationTurn::assistant("reply"),
        ];
        let messages = build_messages("rules", &history, "second");
        let roles: Vec<Role> = messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![Role::System, Role::User, Role::Assistant, Role::User]
        );
        assert_eq!(messages[0].content, "rules");
        assert_eq!(messages[3].content, "second");
    }

    #[test]
    fn error_turns_are_not_sent() {
        let history = vec![
            ConversationTurn::user("first"),
            ConversationTurn::error("Could not reach the assistant."),
        ];
        let messages = build_messages("rules", &history, "again");
        assert_eq!(messages.len(), 3);
        assert!(messages
            .iter()
            .all(|m| m.content != "Could not reach the assistant."));
    }

    #[test]
    fn record_reply_marks_failures() {
        let mut conversation = Conversation::new();
        conversation.push_user("hello");
        let ok = conversation.record_reply::<String>(Ok("hi".to_string())).clone();
        assert!(!ok.is_error);
        let failed = conversation
            .record_reply::<String>(Err("rate limited".to_string()))
            .clone();
        assert!(failed.is_error);
        assert_eq!(failed.role, TurnRole::Assistant);
        assert_eq!(failed.content, "rate limited");
        assert_eq!(conversation.len(), 3);

        conversation.clear();
        assert!(conversation.is_empty());
    }
}
