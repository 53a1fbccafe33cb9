//! # FAQ Listing Handler
//!
//! Serves the browsable FAQ list for one language, optionally filtered by a
//! search string and always grouped by category in alphabetical order.

use super::{wrap_response, ApiResponse, AppError, AppState, DebugParams};
use crate::types::{FaqCategory, FaqListResponse, FaqQuery};
use axum::{
    extract::{Query, State},
    Json,
};
use faqchat::{corpus::group_entries, CategoryOrder};
use serde_json::json;
use tracing::info;

/// The handler for `GET /faqs`.
pub async fn list_faqs_handler(
    State(app_state): State<AppState>,
    Query(query): Query<FaqQuery>,
    debug_params: Query<DebugParams>,
) -> Result<Json<ApiResponse<FaqListResponse>>, AppError> {
    let language = query.lang.unwrap_or_default();
    let search = query.q.as_deref().unwrap_or("").trim();
    info!(%language, search, "Listing FAQs");

    let corpus = app_state.library.get(language)?;
    let matches = corpus.search(search);
    let match_count = matches.len();
    let categories: Vec<FaqCategory> = group_entries(matches, CategoryOrder::Alphabetical)
        .into_iter()
        .map(FaqCategory::from)
        .collect();

    let debug_info = Some(json!({
        "total": corpus.len(),
        "matched": match_count,
    }));
    Ok(wrap_response(
        FaqListResponse {
            language,
            categories,
        },
        debug_params,
        debug_info,
    ))
}
