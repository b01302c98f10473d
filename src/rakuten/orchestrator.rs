// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search strategy orchestration
//!
//! A small state machine over four strategies, attempted strictly in order
//! with one upstream call each:
//!
//! - `Isbn` is terminal even with zero results (an empty ISBN lookup is a
//!   valid answer, not a miss).
//! - `Author` is speculative: an error or an empty page falls through to
//!   `Keyword`. It is the only strategy whose upstream failure is absorbed,
//!   because it has a designated successor.
//! - `Keyword` falls through to `TitleFallback` on an empty page.
//! - `TitleFallback` is terminal.
//!
//! Strategies never run concurrently; each completes before the next
//! begins.

use tracing::{debug, warn};

use super::client::{BooksApi, BooksPage, SearchFilter, SearchParams};
use super::types::{RakutenError, SearchMode, SearchOutcome};
use crate::query::{is_likely_author_query, normalize_query, SearchType};

/// Upstream cap on hits per page.
pub const MAX_HITS: u32 = 30;
/// Hits requested when the caller does not say.
pub const DEFAULT_HITS: u32 = 20;
/// Upstream cap on the page number.
pub const MAX_PAGE: u32 = 100;
/// First page.
pub const DEFAULT_PAGE: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Isbn,
    Author,
    Keyword,
    TitleFallback,
}

impl Strategy {
    fn filter(self, query: &str) -> SearchFilter {
        match self {
            Strategy::Isbn => SearchFilter::Isbn(query.to_string()),
            Strategy::Author => SearchFilter::Author(query.to_string()),
            Strategy::Keyword => SearchFilter::Keyword(query.to_string()),
            Strategy::TitleFallback => SearchFilter::Title(query.to_string()),
        }
    }

    fn mode(self) -> SearchMode {
        match self {
            Strategy::Isbn => SearchMode::Isbn,
            Strategy::Author => SearchMode::Author,
            Strategy::Keyword => SearchMode::Keyword,
            Strategy::TitleFallback => SearchMode::TitleFallback,
        }
    }

    /// Successor when this strategy produced no items.
    fn on_empty(self) -> Option<Strategy> {
        match self {
            Strategy::Isbn => None,
            Strategy::Author => Some(Strategy::Keyword),
            Strategy::Keyword => Some(Strategy::TitleFallback),
            Strategy::TitleFallback => None,
        }
    }

    /// Successor when this strategy's upstream call failed; only the
    /// speculative author strategy absorbs failures.
    fn on_error(self) -> Option<Strategy> {
        match self {
            Strategy::Author => Some(Strategy::Keyword),
            _ => None,
        }
    }
}

/// Drives the strategy chain against a [`BooksApi`] implementation.
pub struct SearchOrchestrator<A: BooksApi> {
    api: A,
}

impl<A: BooksApi> SearchOrchestrator<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Run one orchestrated search.
    ///
    /// `hits` and `page` are clamped to the upstream's documented ranges
    /// before the first call.
    pub async fn search(
        &self,
        query: &str,
        search_type: SearchType,
        hits: u32,
        page: u32,
    ) -> Result<SearchOutcome, RakutenError> {
        let hits = hits.clamp(1, MAX_HITS);
        let page = page.clamp(1, MAX_PAGE);

        let is_isbn = search_type.is_isbn();
        let normalized = normalize_query(query, is_isbn);

        let mut strategy = if is_isbn {
            Strategy::Isbn
        } else if is_likely_author_query(&normalized) {
            Strategy::Author
        } else {
            Strategy::Keyword
        };

        loop {
            let params = SearchParams {
                filter: strategy.filter(&normalized),
                hits,
                page,
            };

            match self.api.search(&params).await {
                Ok(result) if result.items.is_empty() => match strategy.on_empty() {
                    Some(next) => {
                        debug!(
                            from = ?strategy,
                            to = ?next,
                            "strategy returned no items, falling through"
                        );
                        strategy = next;
                    }
                    None => return Ok(outcome(result, hits, page, strategy.mode())),
                },
                Ok(result) => return Ok(outcome(result, hits, page, strategy.mode())),
                Err(e) => match strategy.on_error() {
                    Some(next) => {
                        warn!(
                            from = ?strategy,
                            to = ?next,
                            error = %e,
                            "strategy failed, falling through"
                        );
                        strategy = next;
                    }
                    None => return Err(e),
                },
            }
        }
    }
}

fn outcome(result: BooksPage, hits: u32, page: u32, mode: SearchMode) -> SearchOutcome {
    SearchOutcome {
        count: result.count.unwrap_or(result.items.len() as u64),
        hits: result.hits.unwrap_or(hits),
        page: result.page.unwrap_or(page),
        page_count: result.page_count,
        search_mode: mode,
        items: result.items,
    }
}
