use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use faqchat::{AssistantError, ChatError, CorpusError};
use serde_json::json;
use tracing::error;

/// A custom error type for the server application.
///
/// This enum encapsulates different kinds of errors that can occur within the server,
/// allowing them to be converted into appropriate HTTP responses.
pub enum AppError {
    /// Errors originating from `faqchat`.
    Assistant(AssistantError),
    /// The request was well-formed but cannot be served as asked.
    BadRequest(String),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<AssistantError> for AppError {
    fn from(err: AssistantError) -> Self {
        AppError::Assistant(err)
    }
}

impl From<ChatError> for AppError {
    fn from(err: ChatError) -> Self {
        AppError::Assistant(AssistantError::Chat(err))
    }
}

impl From<CorpusError> for AppError {
    fn from(err: CorpusError) -> Self {
        AppError::Assistant(AssistantError::Corpus(err))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::Assistant(err) => {
                // Log the original error for debugging purposes
                error!("AssistantError: {:?}", err);
                match err {
                    AssistantError::Chat(ChatError::Configuration(msg)) => {
                        (StatusCode::SERVICE_UNAVAILABLE, msg)
                    }
                    AssistantError::Chat(ChatError::Transport { message, .. }) => {
                        (StatusCode::BAD_GATEWAY, message)
                    }
                    AssistantError::Chat(e @ ChatError::InvalidRequest(_)) => {
                        (StatusCode::BAD_REQUEST, e.to_string())
                    }
                    AssistantError::Chat(e @ ChatError::ReqwestClientBuild(_)) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
                    }
                    AssistantError::Corpus(e @ CorpusError::MissingLanguage(_)) => {
                        (StatusCode::NOT_FOUND, e.to_string())
                    }
                    AssistantError::Corpus(e) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("FAQ corpus error: {e}"),
                    ),
                }
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
