// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Types for the Rakuten Books pipeline

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// The strategy that actually produced a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMode {
    #[serde(rename = "isbn")]
    Isbn,
    #[serde(rename = "author")]
    Author,
    #[serde(rename = "keyword")]
    Keyword,
    #[serde(rename = "title-fallback")]
    TitleFallback,
}

/// A book normalized from a Rakuten Books response.
///
/// Everything except the title is optional and passes through as absent
/// when the upstream omits it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RakutenBook {
    /// Display title; `"タイトル不明"` when the upstream has none
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_url: Option<String>,
}

/// Final result of one orchestrated search.
///
/// `Items` keeps the original capitalized key for wire compatibility with
/// existing clients of the proxy.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    #[serde(rename = "Items")]
    pub items: Vec<RakutenBook>,
    pub count: u64,
    pub hits: u32,
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u64>,
    pub search_mode: SearchMode,
}

/// Errors from the Rakuten Books pipeline.
#[derive(Debug, Error)]
pub enum RakutenError {
    /// Upstream answered with a non-2xx status
    #[error("Rakuten Books API returned status {status}: {body}")]
    Api {
        /// Upstream HTTP status
        status: u16,
        /// Raw upstream error body
        body: String,
    },

    /// The upstream call did not complete in time
    #[error("Rakuten Books API request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Network-level failure reaching the upstream
    #[error("failed to reach Rakuten Books API: {0}")]
    Transport(String),

    /// The response body was not the documented shape
    #[error("failed to decode Rakuten Books API response: {0}")]
    Decode(String),
}

// ---------------------------------------------------------------------------
// Raw upstream response shapes (deserialize only)
// ---------------------------------------------------------------------------

/// Top-level Rakuten Books search response.
///
/// The paging scalars sometimes arrive as numeric strings; both forms
/// decode. Items arrive flat with `formatVersion=2` but wrapped in
/// `{"Item": ...}` with the legacy format; both are accepted.
#[derive(Debug, Deserialize)]
pub struct RawBooksResponse {
    #[serde(rename = "Items", default)]
    pub items: Vec<RawBookEntry>,
    #[serde(default, deserialize_with = "flexible_u64")]
    pub count: Option<u64>,
    #[serde(default, deserialize_with = "flexible_u64")]
    pub hits: Option<u64>,
    #[serde(default, deserialize_with = "flexible_u64")]
    pub page: Option<u64>,
    #[serde(rename = "pageCount", default, deserialize_with = "flexible_u64")]
    pub page_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawBookEntry {
    Wrapped {
        #[serde(rename = "Item")]
        item: RawBook,
    },
    Flat(RawBook),
}

impl RawBookEntry {
    pub fn into_inner(self) -> RawBook {
        match self {
            RawBookEntry::Wrapped { item } => item,
            RawBookEntry::Flat(item) => item,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publisher_name: Option<String>,
    pub sales_date: Option<String>,
    pub isbn: Option<String>,
    pub item_caption: Option<String>,
    pub small_image_url: Option<String>,
    pub medium_image_url: Option<String>,
    pub large_image_url: Option<String>,
    pub item_url: Option<String>,
}

/// Accept numbers, numeric strings, or nothing.
fn flexible_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => {
            n.as_u64().or_else(|| n.as_f64().map(|f| f.trunc() as u64))
        }
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}
