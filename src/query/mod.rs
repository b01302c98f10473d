// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Query normalization and intent classification
//!
//! Shared by both catalog pipelines:
//! - Whitespace normalization and ISBN hyphen stripping
//! - Heuristic detection of queries that look like an author name

pub mod intent;
pub mod normalize;

pub use intent::is_likely_author_query;
pub use normalize::normalize_query;

use serde::{Deserialize, Serialize};

/// How the caller wants the query interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// Exact ISBN lookup (hyphens are stripped before use)
    Isbn,
    /// Free-text keyword search
    #[default]
    #[serde(other)]
    Keywords,
}

impl SearchType {
    /// True when the query should be treated as an ISBN.
    pub fn is_isbn(self) -> bool {
        matches!(self, SearchType::Isbn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_type_deserialization() {
        let isbn: SearchType = serde_json::from_str(r#""isbn""#).unwrap();
        assert_eq!(isbn, SearchType::Isbn);

        let keywords: SearchType = serde_json::from_str(r#""keywords""#).unwrap();
        assert_eq!(keywords, SearchType::Keywords);
    }

    #[test]
    fn test_search_type_unknown_falls_back_to_keywords() {
        let other: SearchType = serde_json::from_str(r#""fulltext""#).unwrap();
        assert_eq!(other, SearchType::Keywords);
    }

    #[test]
    fn test_search_type_default() {
        assert_eq!(SearchType::default(), SearchType::Keywords);
        assert!(!SearchType::default().is_isbn());
        assert!(SearchType::Isbn.is_isbn());
    }
}
