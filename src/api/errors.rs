// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! API error responses
//!
//! Every failure leaves the proxy as JSON `{ "error": ... }` with a status
//! mirroring the cause. Messages describe the violation; secrets and raw
//! upstream bodies go to the log, never to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire shape of every error the proxy emits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone)]
pub enum ApiError {
    /// Malformed body or invalid parameters (400)
    InvalidRequest(String),
    /// Required upstream credentials are not configured (500)
    MissingCredentials(&'static str),
    /// Upstream answered with an error status; mirrored to the caller
    Upstream { status: u16, message: String },
    /// Anything else (500)
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidRequest(_) => 400,
            ApiError::MissingCredentials(_) => 500,
            // Upstream statuses below 400 make no sense on an error path;
            // treat them as a bad gateway.
            ApiError::Upstream { status, .. } => {
                if *status >= 400 {
                    *status
                } else {
                    502
                }
            }
            ApiError::Internal(_) => 500,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidRequest(msg) => write!(f, "{}", msg),
            ApiError::MissingCredentials(provider) => {
                write!(f, "Missing {} credentials", provider)
            }
            ApiError::Upstream { message, .. } => write!(f, "{}", message),
            ApiError::Internal(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidRequest("Query is required".to_string()).status_code(),
            400
        );
        assert_eq!(
            ApiError::MissingCredentials("Amazon PA-API").status_code(),
            500
        );
        assert_eq!(
            ApiError::Upstream {
                status: 429,
                message: "TooManyRequests".to_string()
            }
            .status_code(),
            429
        );
        assert_eq!(ApiError::Internal("boom".to_string()).status_code(), 500);
    }

    #[test]
    fn test_upstream_success_status_becomes_bad_gateway() {
        let err = ApiError::Upstream {
            status: 200,
            message: "odd".to_string(),
        };
        assert_eq!(err.status_code(), 502);
    }

    #[test]
    fn test_missing_credentials_message() {
        let err = ApiError::MissingCredentials("Rakuten API");
        assert_eq!(err.to_string(), "Missing Rakuten API credentials");
    }
}
