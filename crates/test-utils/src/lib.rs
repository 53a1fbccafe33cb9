use anyhow::Result;
use async_trait::async_trait;
use faqchat::{
    ChatError, ChatMessage, ChatProvider, FaqCorpus, FaqEntry, FaqLibrary, Language, Role,
};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

// --- Sample Corpora ---

/// A small English corpus spanning two categories.
pub fn sample_corpus_en() -> Result<FaqCorpus> {
    Ok(FaqCorpus::new(vec![
        FaqEntry::new("1", "Billing", "How do I cancel?", "Go to settings."),
        FaqEntry::new("2", "Account", "How do I reset my password?", "Use the reset link."),
        FaqEntry::new("3", "Billing", "Which cards do you accept?", "Visa and Mastercard."),
    ])?)
}

/// A small Japanese corpus spanning two categories.
pub fn sample_corpus_ja() -> Result<FaqCorpus> {
    Ok(FaqCorpus::new(vec![
        FaqEntry::new("1", "料金", "解約方法を教えてください。", "設定画面から解約できます。"),
        FaqEntry::new("2", "アカウント", "パスワードを忘れました。", "再設定リンクをご利用ください。"),
    ])?)
}

/// A library holding both sample corpora.
pub fn sample_library() -> Result<FaqLibrary> {
    Ok(FaqLibrary::new()
        .with_corpus(Language::En, sample_corpus_en()?)
        .with_corpus(Language::Ja, sample_corpus_ja()?))
}

// --- Mock Chat Provider ---

#[derive(Clone, Debug)]
pub struct MockChatProvider {
    responses: Arc<Mutex<HashMap<String, String>>>,
    calls: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
}

impl MockChatProvider {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Pre-programs a reply for any request whose last user message contains `key`.
    pub fn add_response(&self, key: &str, response: &str) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(key.to_string(), response.to_string());
    }

    /// Retrieves the recorded message lists for assertion.
    pub fn get_calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockChatProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ChatError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(messages.to_vec());

        let question = messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
            .unwrap_or_default();

        let responses = self.responses.lock().unwrap();
        for (key, response) in responses.iter() {
            if question.contains(key) {
                return Ok(response.clone());
            }
        }

        Err(ChatError::Transport {
            status: None,
            message: format!("MockChatProvider: No response programmed for question. Got: '{question}'"),
        })
    }
}
