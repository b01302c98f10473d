// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP API surface of the proxy

pub mod amazon_search;
pub mod errors;
pub mod http_server;
pub mod rakuten_search;

pub use amazon_search::{amazon_search_handler, AmazonSearchRequest, AmazonSearchResponse};
pub use errors::{ApiError, ErrorResponse};
pub use http_server::{build_router, start_server, AppState};
pub use rakuten_search::{rakuten_search_handler, RakutenSearchRequest};
