// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Book-catalog proxy node
//!
//! Accepts normalized book-search requests and forwards them to one of two
//! upstream catalogs:
//! - Amazon PA-API v5, with AWS Signature v4 request signing
//! - Rakuten Books, with query-intent classification and a strict
//!   fallback strategy chain (ISBN → author → keyword → title)

pub mod api;
pub mod config;
pub mod paapi;
pub mod query;
pub mod rakuten;
pub mod signing;

pub use api::{build_router, start_server, AppState};
pub use config::AppConfig;
pub use paapi::{BookItem, PaapiClient, PaapiError};
pub use query::{is_likely_author_query, normalize_query, SearchType};
pub use rakuten::{
    BooksApi, BooksPage, RakutenBook, RakutenClient, RakutenError, SearchFilter, SearchMode,
    SearchOrchestrator, SearchOutcome, SearchParams,
};
pub use signing::{derive_signing_key, sign_request, Operation, SignedRequest, SigningError};
