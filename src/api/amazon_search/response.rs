// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Amazon search response types

use serde::{Deserialize, Serialize};

use crate::paapi::BookItem;
use crate::query::SearchType;

/// Response body for POST /v1/books/amazon
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmazonSearchResponse {
    /// Normalized book items
    pub items: Vec<BookItem>,
    /// Upstream request id when the upstream reported one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Echo of the requested search type
    pub search_type: SearchType,
}
