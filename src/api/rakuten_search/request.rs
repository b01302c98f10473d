// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Rakuten search request types
//!
//! The success response is [`crate::rakuten::SearchOutcome`] serialized
//! directly; it already carries the wire shape.

use serde::{Deserialize, Serialize};

use crate::query::SearchType;
use crate::rakuten::{DEFAULT_HITS, DEFAULT_PAGE};

/// Request body for POST /v1/books/rakuten
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RakutenSearchRequest {
    /// Search query string (required, non-empty after trimming)
    pub query: String,

    /// How to interpret the query (default: keywords)
    #[serde(default)]
    pub search_type: SearchType,

    /// Results per page, clamped to 1..=30 (default 20)
    #[serde(default = "default_hits")]
    pub hits: u32,

    /// Page number, clamped to 1..=100 (default 1)
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_hits() -> u32 {
    DEFAULT_HITS
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

impl RakutenSearchRequest {
    /// Validate the request.
    pub fn validate(&self) -> Result<(), String> {
        if self.query.trim().is_empty() {
            return Err("Query is required".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserialization() {
        let json = r#"{
            "query": "村上春樹",
            "searchType": "keywords",
            "hits": 30,
            "page": 2
        }"#;

        let request: RakutenSearchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.query, "村上春樹");
        assert_eq!(request.hits, 30);
        assert_eq!(request.page, 2);
    }

    #[test]
    fn test_request_defaults() {
        let json = r#"{"query": "test"}"#;

        let request: RakutenSearchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.search_type, SearchType::Keywords);
        assert_eq!(request.hits, 20);
        assert_eq!(request.page, 1);
    }

    #[test]
    fn test_validation_empty_query() {
        let request = RakutenSearchRequest {
            query: "".to_string(),
            search_type: SearchType::Keywords,
            hits: 20,
            page: 1,
        };
        assert!(request.validate().is_err());
    }
}
