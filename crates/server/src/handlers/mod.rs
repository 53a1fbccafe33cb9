//! # API Route Handlers
//!
//! This module organizes all the Axum route handlers for the `faqchat-server`.
//! The handlers are split into sub-modules by concern: service status, the
//! FAQ listing and the chat endpoint.

pub mod chat;
pub mod faq;
pub mod general;

// Re-export all handlers from the sub-modules to make them easily accessible
// to the router under a single `handlers::` path.
pub use chat::*;
pub use faq::*;
pub use general::*;

// Shared items used by multiple handler modules.
use super::{
    errors::AppError,
    state::AppState,
    types::{ApiResponse, DebugParams},
};
use axum::{extract::Query, Json};
use serde_json::Value;

/// A shared helper function to wrap a successful result in the standard `ApiResponse`
/// format, optionally including debug information if requested.
pub(crate) fn wrap_response<T>(
    result: T,
    debug_params: Query<DebugParams>,
    debug_info: Option<Value>,
) -> Json<ApiResponse<T>> {
    let debug = if debug_params.debug.unwrap_or(false) {
        debug_info
    } else {
        None
    };
    Json(ApiResponse { debug, result })
}
