#![allow(dead_code)]
//! # Common Test Utilities
//!
//! This module provides shared utilities for testing, such as sample corpora
//! and a recording mock provider, to keep tests isolated and repeatable.

use async_trait::async_trait;
use dotenvy::dotenv;
use faqchat::{ChatError, ChatMessage, ChatProvider, FaqCorpus, FaqEntry};
use std::sync::{Arc, Once, RwLock};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// A small English corpus spanning two categories, with interleaved entries.
pub fn sample_corpus_en() -> FaqCorpus {
    FaqCorpus::new(vec![
        FaqEntry::new("1", "Billing", "How do I cancel?", "Go to settings."),
        FaqEntry::new("2", "Account", "How do I reset my password?", "Use the reset link."),
        FaqEntry::new("3", "Billing", "Which cards do you accept?", "Visa and Mastercard."),
        FaqEntry::new("4", "Account", "Can I change my email?", "Yes, from your profile."),
    ])
    .expect("sample corpus is valid")
}

/// A small Japanese corpus.
pub fn sample_corpus_ja() -> FaqCorpus {
    FaqCorpus::new(vec![
        FaqEntry::new("1", "料金", "解約方法を教えてください。", "設定画面から解約できます。"),
        FaqEntry::new("2", "アカウント", "パスワードを忘れました。", "再設定リンクをご利用ください。"),
    ])
    .expect("sample corpus is valid")
}

// --- Mock Chat Provider for Logic Testing ---

#[derive(Clone, Debug)]
pub struct MockChatProvider {
    pub call_history: Arc<RwLock<Vec<Vec<ChatMessage>>>>,
    pub responses: Arc<RwLock<Vec<Result<String, String>>>>,
}

impl MockChatProvider {
    /// Replies are handed out in order; failures become transport errors.
    pub fn new(responses: Vec<Result<String, String>>) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            responses: Arc::new(RwLock::new(responses.into_iter().rev().collect())),
        }
    }

    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.call_history.read().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ChatError> {
        self.call_history.write().unwrap().push(messages.to_vec());

        match self.responses.write().unwrap().pop() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(ChatError::Transport {
                status: Some(500),
                message,
            }),
            None => Ok("Default mock response".to_string()),
        }
    }
}
