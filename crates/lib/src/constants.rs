//! # Shared Constants
//!
//! Fixed strings and defaults shared by the library, the server and the CLI.

/// The chat-completions endpoint used when none is configured.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// The model identifier used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// The sampling temperature used when none is configured.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// The environment variable the API credential is read from.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// The refusal sentence the assistant must use for English questions it cannot answer.
pub const REFUSAL_EN: &str = "Sorry, I cannot answer that question.";

/// The refusal sentence the assistant must use for Japanese questions it cannot answer.
pub const REFUSAL_JA: &str = "申し訳ありませんが、その質問にはお答えできません。";

pub const NOT_CONFIGURED_EN: &str =
    "The assistant is not configured. Please set the API key in your .env file.";
pub const NOT_CONFIGURED_JA: &str =
    "OpenAI APIキーが設定されていません。.envファイルをご確認ください。";

pub const UNREACHABLE_EN: &str = "Could not reach the assistant.";
pub const UNREACHABLE_JA: &str = "OpenAI APIからデータを取得できませんでした。";

pub const NO_REPLY_EN: &str = "The assistant produced no reply.";
pub const NO_REPLY_JA: &str = "AIアシスタントから返答がありませんでした。";
