//! # Chat Handler
//!
//! Answers one user message against the FAQ corpus of the requested language.
//! The client owns the transcript and sends it with every request.

use super::{wrap_response, ApiResponse, AppError, AppState, DebugParams};
use crate::types::{ChatRequest, ChatResponse};
use axum::{
    extract::{Query, State},
    Json,
};
use faqchat::{ConversationTurn, CorpusError};
use serde_json::json;
use tracing::info;

/// The handler for `POST /chat`.
///
/// Failures are not folded into the reply: a missing credential answers 503
/// and an unreachable or failing upstream answers 502, each with `{"error": ...}`.
pub async fn chat_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ApiResponse<ChatResponse>>, AppError> {
    let question = payload.message.as_str();
    if question.trim().is_empty() {
        return Err(AppError::BadRequest(
            "The 'message' field must not be empty.".to_string(),
        ));
    }
    info!(
        language = %payload.language,
        history_len = payload.history.len(),
        "Received chat message"
    );

    let assistant = app_state
        .assistant(payload.language)
        .ok_or_else(|| CorpusError::MissingLanguage(payload.language.to_string()))?;

    let debug_info = if debug_params.debug.unwrap_or(false) {
        let messages = assistant.build_request(payload.language, &payload.history, question)?;
        Some(json!({
            "model": app_state.config.chat.model,
            "messages": messages,
        }))
    } else {
        None
    };

    let reply = assistant
        .answer(payload.language, &payload.history, question)
        .await?;

    Ok(wrap_response(
        ChatResponse {
            reply: ConversationTurn::assistant(reply),
        },
        debug_params,
        debug_info,
    ))
}
