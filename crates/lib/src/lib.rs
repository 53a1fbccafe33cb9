//! # FAQ Chat
//!
//! This crate grounds a hosted chat-completion model on a localized FAQ corpus.
//!
//! - [`prompts`] renders a corpus into a digest and wraps it, together with the
//!   user's question, into a language-aware system prompt.
//! - [`providers::ai`] sends one ordered message list to a chat-completion
//!   service and normalizes the reply or the failure.
//! - [`conversation`] and [`FaqAssistant`] connect the two for a caller that
//!   owns the transcript and the active language.

pub mod assistant;
pub mod constants;
pub mod conversation;
pub mod corpus;
pub mod errors;
pub mod prompts;
pub mod providers;
pub mod types;

pub use assistant::FaqAssistant;
pub use conversation::{build_messages, Conversation};
pub use corpus::{CategoryGroup, FaqCorpus, FaqEntry, FaqLibrary};
pub use errors::{AssistantError, ChatError, CorpusError};
pub use prompts::{build_faq_digest, build_system_prompt};
pub use providers::ai::{ChatConfig, ChatProvider, FallbackMessages, OpenAiProvider};
pub use types::{
    CategoryOrder, ChatMessage, ConversationTurn, DigestOptions, Language, Role, TurnRole,
};
