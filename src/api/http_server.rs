// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP server wiring
//!
//! One axum Router with one POST route per pipeline. CORS is permissive
//! (any origin; POST and OPTIONS; Content-Type and Authorization headers),
//! with the layer answering preflight requests. Non-POST methods on the
//! search routes get 405 from axum's method routing.

use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use super::amazon_search::amazon_search_handler;
use super::rakuten_search::rakuten_search_handler;
use crate::config::AppConfig;
use crate::paapi::PaapiClient;
use crate::rakuten::{RakutenClient, SearchOrchestrator};

/// Shared, read-only state handed to every handler.
///
/// A pipeline whose credentials were absent at startup is `None`; its
/// handler answers 500 on every request until configuration is fixed.
#[derive(Clone)]
pub struct AppState {
    pub paapi: Option<Arc<PaapiClient>>,
    pub rakuten: Option<Arc<SearchOrchestrator<RakutenClient>>>,
}

impl AppState {
    /// Build the state from loaded configuration, constructing only the
    /// pipelines whose credentials are present.
    pub fn from_config(config: &AppConfig) -> Self {
        let paapi = config
            .paapi
            .clone()
            .map(|c| Arc::new(PaapiClient::new(c)));
        let rakuten = config
            .rakuten
            .clone()
            .map(|c| Arc::new(SearchOrchestrator::new(RakutenClient::new(c))));

        Self { paapi, rakuten }
    }
}

/// Build the proxy router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/v1/books/amazon", post(amazon_search_handler))
        .route("/v1/books/rakuten", post(rakuten_search_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn start_server(state: AppState, port: u16) -> anyhow::Result<()> {
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("book proxy listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_state() -> AppState {
        AppState {
            paapi: None,
            rakuten: None,
        }
    }

    #[test]
    fn test_router_builds() {
        let _router = build_router(empty_state());
    }

    #[test]
    fn test_state_from_empty_config() {
        let config = AppConfig {
            paapi: None,
            rakuten: None,
            server: crate::config::ServerConfig { port: 8080 },
        };
        let state = AppState::from_config(&config);
        assert!(state.paapi.is_none());
        assert!(state.rakuten.is_none());
    }

    #[test]
    fn test_state_from_full_config() {
        let config = AppConfig {
            paapi: Some(crate::config::PaapiConfig {
                access_key: "key".to_string(),
                secret_key: "secret".to_string(),
                partner_tag: "tag".to_string(),
                region: "us-east-1".to_string(),
                host: "webservices.amazon.co.jp".to_string(),
                timeout_secs: 10,
            }),
            rakuten: Some(crate::config::RakutenConfig {
                application_id: "app".to_string(),
                timeout_secs: 10,
            }),
            server: crate::config::ServerConfig { port: 8080 },
        };
        let state = AppState::from_config(&config);
        assert!(state.paapi.is_some());
        assert!(state.rakuten.is_some());
    }
}
