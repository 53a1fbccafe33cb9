use faqchat::{CategoryGroup, ConversationTurn, FaqEntry, Language};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, Default)]
pub struct DebugParams {
    pub debug: Option<bool>,
}

#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<Value>,
    pub result: T,
}

// --- /faqs ---

#[derive(Debug, Deserialize, Default)]
pub struct FaqQuery {
    /// Defaults to Japanese when absent.
    pub lang: Option<Language>,
    /// Case-insensitive filter over questions and answers.
    pub q: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct FaqCategory {
    pub category: String,
    pub faqs: Vec<FaqEntry>,
}

impl From<CategoryGroup<'_>> for FaqCategory {
    fn from(group: CategoryGroup<'_>) -> Self {
        Self {
            category: group.category.to_string(),
            faqs: group.entries.into_iter().cloned().collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct FaqListResponse {
    pub language: Language,
    pub categories: Vec<FaqCategory>,
}

// --- /chat ---

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: ConversationTurn,
}
