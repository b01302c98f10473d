// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Rakuten search endpoint handler

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::{debug, error, info, warn};

use super::request::RakutenSearchRequest;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::rakuten::SearchOutcome;

/// POST /v1/books/rakuten - orchestrated Rakuten Books search
///
/// # Errors
/// - 400: malformed JSON body or empty query (no upstream call is made)
/// - 500: credentials not configured, or a non-absorbed upstream failure
pub async fn rakuten_search_handler(
    State(state): State<AppState>,
    payload: Result<Json<RakutenSearchRequest>, JsonRejection>,
) -> Result<Json<SearchOutcome>, ApiError> {
    // Credentials are checked before the body: a misconfigured node answers
    // 500 for every request regardless of payload.
    let orchestrator = state
        .rakuten
        .as_ref()
        .ok_or(ApiError::MissingCredentials("Rakuten API"))?;

    let Json(request) = payload.map_err(|e| {
        warn!("rejecting malformed Rakuten search body: {}", e);
        ApiError::InvalidRequest("Invalid JSON payload".to_string())
    })?;

    if let Err(e) = request.validate() {
        warn!("Rakuten search validation failed: {}", e);
        return Err(ApiError::InvalidRequest(e));
    }

    debug!(query = %request.query, search_type = ?request.search_type, "Rakuten search request");

    let outcome = orchestrator
        .search(&request.query, request.search_type, request.hits, request.page)
        .await
        .map_err(|e| {
            error!("Rakuten Books proxy error: {}", e);
            ApiError::Internal("Failed to fetch from Rakuten Books API".to_string())
        })?;

    info!(
        mode = ?outcome.search_mode,
        count = outcome.items.len(),
        "Rakuten search complete"
    );

    Ok(Json(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_exists() {
        let _ = rakuten_search_handler;
    }
}
