// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Amazon search request types

use serde::{Deserialize, Serialize};

use crate::query::SearchType;

/// Request body for POST /v1/books/amazon
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmazonSearchRequest {
    /// Search query string (required, non-empty after trimming)
    pub query: String,

    /// How to interpret the query (default: keywords)
    #[serde(default)]
    pub search_type: SearchType,

    /// Number of results to return (capped at 20 upstream, default 10)
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

fn default_max_results() -> u32 {
    10
}

impl AmazonSearchRequest {
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
            "query": "走れメロス",
            "searchType": "isbn",
            "maxResults": 5
        }"#;

        let request: AmazonSearchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.query, "走れメロス");
        assert_eq!(request.search_type, SearchType::Isbn);
        assert_eq!(request.max_results, 5);
    }

    #[test]
    fn test_request_defaults() {
        let json = r#"{"query": "test"}"#;

        let request: AmazonSearchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.search_type, SearchType::Keywords);
        assert_eq!(request.max_results, 10);
    }

    #[test]
    fn test_validation_empty_query() {
        let request = AmazonSearchRequest {
            query: "   ".to_string(),
            search_type: SearchType::Keywords,
            max_results: 10,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validation_success() {
        let request = AmazonSearchRequest {
            query: "valid".to_string(),
            search_type: SearchType::Keywords,
            max_results: 10,
        };
        assert!(request.validate().is_ok());
    }
}
