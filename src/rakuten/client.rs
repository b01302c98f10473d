// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Rakuten Books API client
//!
//! The [`BooksApi`] trait is the seam between the orchestrator and the
//! wire: the orchestrator only knows "one call with one filter", so the
//! whole fallback chain is testable with a scripted implementation.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::mapper::map_item;
use super::types::{RakutenBook, RakutenError, RawBooksResponse};
use crate::config::RakutenConfig;

const RAKUTEN_API_URL: &str =
    "https://app.rakuten.co.jp/services/api/BooksBook/Search/20170404";
const DEFAULT_SORT: &str = "standard";

/// The single filter applied to one upstream call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFilter {
    /// Exact ISBN lookup
    Isbn(String),
    /// Author-name match (sorted by standard relevance)
    Author(String),
    /// OR-combined keyword match
    Keyword(String),
    /// Strict title-field match
    Title(String),
}

impl SearchFilter {
    /// Query-string parameter name and value for this filter.
    pub fn param(&self) -> (&'static str, &str) {
        match self {
            SearchFilter::Isbn(v) => ("isbn", v),
            SearchFilter::Author(v) => ("author", v),
            SearchFilter::Keyword(v) => ("keyword", v),
            SearchFilter::Title(v) => ("title", v),
        }
    }
}

/// Parameters of one upstream call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub filter: SearchFilter,
    pub hits: u32,
    pub page: u32,
}

/// One page of upstream results after mapping.
#[derive(Debug, Clone, Default)]
pub struct BooksPage {
    pub items: Vec<RakutenBook>,
    pub count: Option<u64>,
    pub hits: Option<u32>,
    pub page: Option<u32>,
    pub page_count: Option<u64>,
}

/// One upstream book-search call.
#[async_trait]
pub trait BooksApi: Send + Sync {
    async fn search(&self, params: &SearchParams) -> Result<BooksPage, RakutenError>;
}

/// HTTP client for the Rakuten Books search endpoint.
pub struct RakutenClient {
    application_id: String,
    timeout_secs: u64,
    client: Client,
}

impl RakutenClient {
    pub fn new(config: RakutenConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            application_id: config.application_id,
            timeout_secs: config.timeout_secs,
            client,
        }
    }

    /// Query-string pairs for one call. `author` and `keyword` searches are
    /// relevance-sorted; keyword searches additionally OR-combine terms.
    fn query_pairs(&self, params: &SearchParams) -> Vec<(&'static str, String)> {
        let (name, value) = params.filter.param();
        let mut pairs = vec![
            ("applicationId", self.application_id.clone()),
            ("format", "json".to_string()),
            ("formatVersion", "2".to_string()),
            ("hits", params.hits.to_string()),
            ("page", params.page.to_string()),
            (name, value.to_string()),
        ];

        match params.filter {
            SearchFilter::Author(_) => {
                pairs.push(("sort", DEFAULT_SORT.to_string()));
            }
            SearchFilter::Keyword(_) => {
                pairs.push(("orFlag", "1".to_string()));
                pairs.push(("sort", DEFAULT_SORT.to_string()));
            }
            SearchFilter::Isbn(_) | SearchFilter::Title(_) => {}
        }

        pairs
    }
}

#[async_trait]
impl BooksApi for RakutenClient {
    async fn search(&self, params: &SearchParams) -> Result<BooksPage, RakutenError> {
        let pairs = self.query_pairs(params);

        debug!(filter = ?params.filter.param().0, "issuing Rakuten Books request");

        let response = self
            .client
            .get(RAKUTEN_API_URL)
            .query(&pairs)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RakutenError::Timeout {
                        timeout_ms: self.timeout_secs * 1000,
                    }
                } else {
                    RakutenError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RakutenError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let raw: RawBooksResponse = response
            .json()
            .await
            .map_err(|e| RakutenError::Decode(e.to_string()))?;

        let items = raw
            .items
            .into_iter()
            .map(|entry| map_item(entry.into_inner()))
            .collect::<Vec<_>>();

        debug!(count = items.len(), "Rakuten Books search complete");

        Ok(BooksPage {
            items,
            count: raw.count,
            hits: raw.hits.map(|h| h as u32),
            page: raw.page.map(|p| p as u32),
            page_count: raw.page_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> RakutenClient {
        RakutenClient::new(RakutenConfig {
            application_id: "app-123".to_string(),
            timeout_secs: 10,
        })
    }

    fn pairs_for(filter: SearchFilter) -> Vec<(&'static str, String)> {
        test_client().query_pairs(&SearchParams {
            filter,
            hits: 20,
            page: 1,
        })
    }

    fn value_of<'a>(pairs: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
        pairs.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_base_parameters_always_present() {
        let pairs = pairs_for(SearchFilter::Isbn("9784101010137".to_string()));
        assert_eq!(value_of(&pairs, "applicationId"), Some("app-123"));
        assert_eq!(value_of(&pairs, "format"), Some("json"));
        assert_eq!(value_of(&pairs, "formatVersion"), Some("2"));
        assert_eq!(value_of(&pairs, "hits"), Some("20"));
        assert_eq!(value_of(&pairs, "page"), Some("1"));
    }

    #[test]
    fn test_isbn_filter_has_no_sort_or_or_flag() {
        let pairs = pairs_for(SearchFilter::Isbn("9784101010137".to_string()));
        assert_eq!(value_of(&pairs, "isbn"), Some("9784101010137"));
        assert!(value_of(&pairs, "sort").is_none());
        assert!(value_of(&pairs, "orFlag").is_none());
    }

    #[test]
    fn test_author_filter_sorted() {
        let pairs = pairs_for(SearchFilter::Author("村上春樹".to_string()));
        assert_eq!(value_of(&pairs, "author"), Some("村上春樹"));
        assert_eq!(value_of(&pairs, "sort"), Some("standard"));
        assert!(value_of(&pairs, "orFlag").is_none());
    }

    #[test]
    fn test_keyword_filter_or_combined_and_sorted() {
        let pairs = pairs_for(SearchFilter::Keyword("走れ メロス".to_string()));
        assert_eq!(value_of(&pairs, "keyword"), Some("走れ メロス"));
        assert_eq!(value_of(&pairs, "orFlag"), Some("1"));
        assert_eq!(value_of(&pairs, "sort"), Some("standard"));
    }

    #[test]
    fn test_title_filter_strict() {
        let pairs = pairs_for(SearchFilter::Title("走れメロス".to_string()));
        assert_eq!(value_of(&pairs, "title"), Some("走れメロス"));
        assert!(value_of(&pairs, "orFlag").is_none());
        assert!(value_of(&pairs, "sort").is_none());
    }
}
