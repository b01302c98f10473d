// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use book_proxy_node::api::{start_server, AppState};
use book_proxy_node::config::AppConfig;
use std::env;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();

    if config.paapi.is_none() {
        warn!("Amazon PA-API credentials not configured; /v1/books/amazon will answer 500");
    }
    if config.rakuten.is_none() {
        warn!("Rakuten application id not configured; /v1/books/rakuten will answer 500");
    }

    let state = AppState::from_config(&config);

    info!("starting book proxy node v{}", env!("CARGO_PKG_VERSION"));

    start_server(state, config.server.port).await
}
