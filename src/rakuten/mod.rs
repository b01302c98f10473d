// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Rakuten Books pipeline (search-orchestration provider)
//!
//! Normalizes the incoming query, classifies its intent and runs a strict
//! fallback chain of upstream searches:
//! ISBN → Author → Keyword → Title fallback.

pub mod client;
pub mod mapper;
pub mod orchestrator;
pub mod types;

pub use client::{BooksApi, BooksPage, RakutenClient, SearchFilter, SearchParams};
pub use orchestrator::{SearchOrchestrator, DEFAULT_HITS, DEFAULT_PAGE, MAX_HITS, MAX_PAGE};
pub use types::{RakutenBook, RakutenError, SearchMode, SearchOutcome};
