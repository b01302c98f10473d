// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Types for the Amazon PA-API pipeline

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::signing::SigningError;

/// A book item normalized from a PA-API response.
///
/// All fields except `asin`, `title`, `authors` and `isKindle` are optional
/// and simply absent when the upstream omits them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookItem {
    /// Amazon item identifier
    pub asin: String,
    /// Display title; `"タイトル不明"` when the upstream has none
    pub title: String,
    /// Contributor names (authors, translators, ...)
    pub authors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u64>,
    /// Cover image URLs by size
    pub image_urls: ImageUrls,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    /// Whether the binding is a Kindle edition
    pub is_kindle: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amazon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_rank: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_price: Option<ListPrice>,
}

/// Cover image URLs by size.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUrls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,
}

/// Listing price of the first offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPrice {
    pub amount: f64,
    pub currency: String,
}

/// Errors from the PA-API pipeline.
#[derive(Debug, Error)]
pub enum PaapiError {
    /// Request signing failed; never sent upstream
    #[error("request signing failed: {0}")]
    Signing(#[from] SigningError),

    /// Upstream answered with a non-2xx status
    #[error("Amazon PA-API error: {status} - {message}")]
    Api {
        /// Upstream HTTP status
        status: u16,
        /// Upstream error message when extractable
        message: String,
    },

    /// The upstream call did not complete in time
    #[error("Amazon PA-API request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Network-level failure reaching the upstream
    #[error("failed to reach Amazon PA-API: {0}")]
    Transport(String),

    /// The response body was not the documented shape
    #[error("failed to decode Amazon PA-API response: {0}")]
    Decode(String),

    /// The request payload could not be serialized
    #[error("failed to serialize PA-API payload: {0}")]
    Serialize(String),
}

// ---------------------------------------------------------------------------
// Raw upstream response shapes (deserialize only)
//
// PA-API wraps most scalar fields in `{ "DisplayValue": ... }` objects.
// Every field is optional; decoding never fails on missing data, it just
// degrades to absent fields.
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct RawResponse {
    #[serde(rename = "SearchResult")]
    pub search_result: Option<RawItemList>,
    #[serde(rename = "ItemsResult")]
    pub items_result: Option<RawItemList>,
    #[serde(rename = "RequestId")]
    pub request_id: Option<String>,
    #[serde(rename = "Errors", default)]
    pub errors: Vec<RawUpstreamError>,
}

#[derive(Debug, Deserialize)]
pub struct RawUpstreamError {
    #[serde(rename = "Code")]
    pub code: Option<String>,
    #[serde(rename = "Message")]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawItemList {
    #[serde(rename = "Items", default)]
    pub items: Vec<RawItem>,
    #[serde(rename = "SearchCompletedRequestId")]
    pub search_completed_request_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawItem {
    #[serde(rename = "ASIN")]
    pub asin: Option<String>,
    #[serde(rename = "DetailPageURL")]
    pub detail_page_url: Option<String>,
    #[serde(rename = "ItemInfo")]
    pub item_info: RawItemInfo,
    #[serde(rename = "Images")]
    pub images: RawImages,
    #[serde(rename = "Offers")]
    pub offers: RawOffers,
    #[serde(rename = "CustomerReviews")]
    pub customer_reviews: RawCustomerReviews,
    #[serde(rename = "BrowseNodeInfo")]
    pub browse_node_info: RawBrowseNodeInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawItemInfo {
    #[serde(rename = "Title")]
    pub title: Option<RawDisplayValue<String>>,
    #[serde(rename = "ByLineInfo")]
    pub by_line_info: RawByLineInfo,
    #[serde(rename = "ContentInfo")]
    pub content_info: RawContentInfo,
    #[serde(rename = "ProductInfo")]
    pub product_info: RawProductInfo,
    #[serde(rename = "Classifications")]
    pub classifications: RawClassifications,
}

#[derive(Debug, Deserialize)]
pub struct RawDisplayValue<T> {
    #[serde(rename = "DisplayValue")]
    pub display_value: Option<T>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawByLineInfo {
    #[serde(rename = "Contributors")]
    pub contributors: Vec<RawContributor>,
    #[serde(rename = "Manufacturer")]
    pub manufacturer: Option<RawDisplayValue<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawContributor {
    #[serde(rename = "Name")]
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawContentInfo {
    #[serde(rename = "PublicationDate")]
    pub publication_date: Option<RawDisplayValue<String>>,
    #[serde(rename = "PagesCount")]
    pub pages_count: Option<RawDisplayValue<u64>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawProductInfo {
    #[serde(rename = "ReleaseDate")]
    pub release_date: Option<RawDisplayValue<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawClassifications {
    #[serde(rename = "Binding")]
    pub binding: Option<RawDisplayValue<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawImages {
    #[serde(rename = "Primary")]
    pub primary: RawImageSet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawImageSet {
    #[serde(rename = "Small")]
    pub small: Option<RawImage>,
    #[serde(rename = "Medium")]
    pub medium: Option<RawImage>,
    #[serde(rename = "Large")]
    pub large: Option<RawImage>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawImage {
    #[serde(rename = "URL")]
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawOffers {
    #[serde(rename = "Listings")]
    pub listings: Vec<RawListing>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawListing {
    #[serde(rename = "Price")]
    pub price: Option<RawPrice>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawPrice {
    #[serde(rename = "Amount")]
    pub amount: Option<f64>,
    #[serde(rename = "Currency")]
    pub currency: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawCustomerReviews {
    #[serde(rename = "StarRating")]
    pub star_rating: Option<RawStarRating>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawStarRating {
    #[serde(rename = "AverageRating")]
    pub average_rating: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawBrowseNodeInfo {
    #[serde(rename = "WebsiteSalesRank")]
    pub website_sales_rank: Option<RawSalesRank>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawSalesRank {
    #[serde(rename = "SalesRank")]
    pub sales_rank: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_item_serializes_camel_case() {
        let item = BookItem {
            asin: "B000000000".to_string(),
            title: "Test".to_string(),
            authors: vec!["Author".to_string()],
            publisher: None,
            publication_date: Some("2024-01-01".to_string()),
            page_count: None,
            image_urls: ImageUrls::default(),
            average_rating: None,
            is_kindle: false,
            amazon_url: None,
            sales_rank: None,
            list_price: None,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["publicationDate"], "2024-01-01");
        assert_eq!(json["isKindle"], false);
        assert!(json.get("publisher").is_none());
    }

    #[test]
    fn test_raw_response_error_shape() {
        let json = r#"{
            "Errors": [
                { "Code": "InvalidPartnerTag", "Message": "The partner tag is invalid." }
            ]
        }"#;

        let raw: RawResponse = serde_json::from_str(json).unwrap();
        assert_eq!(raw.errors.len(), 1);
        assert_eq!(
            raw.errors[0].message.as_deref(),
            Some("The partner tag is invalid.")
        );
        assert!(raw.search_result.is_none());
    }

    #[test]
    fn test_raw_item_tolerates_missing_sections() {
        let raw: RawItem = serde_json::from_str(r#"{"ASIN": "B0XYZ"}"#).unwrap();
        assert_eq!(raw.asin.as_deref(), Some("B0XYZ"));
        assert!(raw.item_info.title.is_none());
        assert!(raw.offers.listings.is_empty());
    }

    #[test]
    fn test_paapi_error_display() {
        let err = PaapiError::Api {
            status: 429,
            message: "TooManyRequests".to_string(),
        };
        assert!(err.to_string().contains("429"));
    }
}
