//! # FAQ Assistant
//!
//! Ties the pieces together for callers: pick the corpus for the active
//! language, build the system prompt, assemble the message list and make the
//! chat call. Stateless per call; language and history come in as arguments.

use crate::{
    conversation::{build_messages, Conversation},
    corpus::FaqLibrary,
    errors::AssistantError,
    prompts::build_system_prompt_with_options,
    providers::ai::ChatProvider,
    types::{ChatMessage, ConversationTurn, DigestOptions, Language},
};
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Clone, Debug)]
pub struct FaqAssistant {
    library: Arc<FaqLibrary>,
    provider: Box<dyn ChatProvider>,
    digest_options: DigestOptions,
}

impl FaqAssistant {
    pub fn new(library: impl Into<Arc<FaqLibrary>>, provider: Box<dyn ChatProvider>) -> Self {
        Self {
            library: library.into(),
            provider,
            digest_options: DigestOptions::default(),
        }
    }

    pub fn with_digest_options(mut self, digest_options: DigestOptions) -> Self {
        self.digest_options = digest_options;
        self
    }

    /// Builds the full message list for `question` without sending it.
    pub fn build_request(
        &self,
        language: Language,
        history: &[ConversationTurn],
        question: &str,
    ) -> Result<Vec<ChatMessage>, AssistantError> {
        let corpus = self.library.get(language)?;
        let system_prompt =
            build_system_prompt_with_options(question, corpus, language, &self.digest_options);
        debug!(
            %language,
            faq_count = corpus.len(),
            prompt_len = system_prompt.len(),
            "Built FAQ system prompt"
        );
        Ok(build_messages(&system_prompt, history, question))
    }

    /// Answers `question` given the prior turns of the conversation.
    pub async fn answer(
        &self,
        language: Language,
        history: &[ConversationTurn],
        question: &str,
    ) -> Result<String, AssistantError> {
        info!(%language, history_len = history.len(), "Answering FAQ question");
        let messages = self.build_request(language, history, question)?;
        let reply = self.provider.complete(&messages).await.map_err(|e| {
            warn!(error = %e, "Chat completion failed");
            e
        })?;
        Ok(reply)
    }

    /// Appends `question` to the transcript, answers it against the turns that
    /// came before, and records the reply or the failure.
    pub async fn ask(
        &self,
        conversation: &mut Conversation,
        language: Language,
        question: &str,
    ) -> ConversationTurn {
        let prior = conversation.len();
        conversation.push_user(question);
        let result = self
            .answer(language, &conversation.turns()[..prior], question)
            .await;
        conversation.record_reply(result).clone()
    }
}
