// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Signed HTTP execution against Amazon PA-API

use chrono::Utc;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::mapper::map_item;
use super::request::build_request;
use super::types::{BookItem, PaapiError, RawResponse};
use crate::config::PaapiConfig;
use crate::query::SearchType;
use crate::signing::{sign_request, sigv4};

/// Result of one PA-API search, mapped to normalized items.
#[derive(Debug, Clone)]
pub struct PaapiOutcome {
    pub items: Vec<BookItem>,
    pub request_id: Option<String>,
}

/// Client for the signed PA-API pipeline.
///
/// Holds immutable credentials and a pooled HTTP client; one instance is
/// shared across requests.
pub struct PaapiClient {
    config: PaapiConfig,
    client: Client,
}

impl PaapiClient {
    pub fn new(config: PaapiConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Execute one search against PA-API.
    ///
    /// Builds the payload, signs it, issues a single POST and maps the
    /// response. Non-2xx upstream answers surface as [`PaapiError::Api`]
    /// with the upstream's own message when it provides one.
    pub async fn search(
        &self,
        query: &str,
        search_type: SearchType,
        max_results: u32,
    ) -> Result<PaapiOutcome, PaapiError> {
        let request = build_request(query, search_type, max_results, &self.config.partner_tag)
            .map_err(|e| PaapiError::Serialize(e.to_string()))?;

        let signed = sign_request(
            &request.body,
            &self.config.host,
            &self.config.region,
            request.operation,
            &self.config.access_key,
            &self.config.secret_key,
            Utc::now(),
        )?;

        debug!(
            operation = request.operation.name(),
            endpoint = %signed.endpoint,
            "issuing signed PA-API request"
        );

        // Header values must stay byte-identical to the canonical ones the
        // signature was computed over.
        let response = self
            .client
            .post(&signed.endpoint)
            .header("content-encoding", sigv4::CONTENT_ENCODING)
            .header("content-type", sigv4::CONTENT_TYPE)
            .header("host", &self.config.host)
            .header("x-amz-date", &signed.amz_date)
            .header("x-amz-target", &signed.target)
            .header("authorization", &signed.authorization)
            .body(signed.body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PaapiError::Timeout {
                        timeout_ms: self.config.timeout_secs * 1000,
                    }
                } else {
                    PaapiError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        let data: RawResponse = response
            .json()
            .await
            .map_err(|e| PaapiError::Decode(e.to_string()))?;

        if !status.is_success() {
            let message = data
                .errors
                .first()
                .and_then(|e| e.message.clone())
                .unwrap_or_else(|| format!("Amazon PA-API error: {}", status.as_u16()));
            return Err(PaapiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let request_id = data.request_id.or_else(|| {
            data.search_result
                .as_ref()
                .and_then(|r| r.search_completed_request_id.clone())
        });

        let items: Vec<BookItem> = data
            .search_result
            .or(data.items_result)
            .map(|list| list.items.into_iter().map(map_item).collect())
            .unwrap_or_default();

        debug!(count = items.len(), "PA-API search complete");

        Ok(PaapiOutcome { items, request_id })
    }
}
