// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! PA-API payload construction

use serde::Serialize;

use crate::query::{normalize_query, SearchType};
use crate::signing::Operation;

/// Hard upstream cap on ItemCount for SearchItems.
pub const MAX_ITEM_COUNT: u32 = 20;
/// Default number of items requested when the caller does not say.
pub const DEFAULT_ITEM_COUNT: u32 = 10;

/// Response resources requested for every item.
pub const RESOURCES: [&str; 12] = [
    "Images.Primary.Small",
    "Images.Primary.Medium",
    "Images.Primary.Large",
    "ItemInfo.ByLineInfo",
    "ItemInfo.Classifications",
    "ItemInfo.ContentInfo",
    "ItemInfo.ProductInfo",
    "ItemInfo.Title",
    "Offers.Listings.Price",
    "CustomerReviews.Count",
    "CustomerReviews.StarRating",
    "BrowseNodeInfo.WebsiteSalesRank",
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct SearchItemsPayload<'a> {
    keywords: &'a str,
    search_index: &'static str,
    resources: &'static [&'static str],
    item_count: u32,
    partner_tag: &'a str,
    partner_type: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct GetItemsPayload<'a> {
    item_ids: [String; 1],
    id_type: &'static str,
    search_index: &'static str,
    resources: &'static [&'static str],
    partner_tag: &'a str,
    partner_type: &'static str,
}

/// Operation plus the serialized body the signature will cover.
#[derive(Debug, Clone)]
pub struct PaapiRequest {
    pub operation: Operation,
    pub body: String,
}

/// Build the upstream payload for a proxy search request.
///
/// Keyword mode issues `SearchItems` over the Books index; ISBN mode issues
/// `GetItems` with the hyphen-stripped ISBN as the item id.
pub fn build_request(
    query: &str,
    search_type: SearchType,
    max_results: u32,
    partner_tag: &str,
) -> Result<PaapiRequest, serde_json::Error> {
    match search_type {
        SearchType::Isbn => {
            let payload = GetItemsPayload {
                item_ids: [normalize_query(query, true)],
                id_type: "ISBN",
                search_index: "Books",
                resources: &RESOURCES,
                partner_tag,
                partner_type: "Associates",
            };
            Ok(PaapiRequest {
                operation: Operation::GetItems,
                body: serde_json::to_string(&payload)?,
            })
        }
        SearchType::Keywords => {
            let payload = SearchItemsPayload {
                keywords: query,
                search_index: "Books",
                resources: &RESOURCES,
                item_count: max_results.clamp(1, MAX_ITEM_COUNT),
                partner_tag,
                partner_type: "Associates",
            };
            Ok(PaapiRequest {
                operation: Operation::SearchItems,
                body: serde_json::to_string(&payload)?,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_payload_shape() {
        let request = build_request("走れメロス", SearchType::Keywords, 10, "tag-22").unwrap();
        assert_eq!(request.operation, Operation::SearchItems);

        let json: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(json["Keywords"], "走れメロス");
        assert_eq!(json["SearchIndex"], "Books");
        assert_eq!(json["ItemCount"], 10);
        assert_eq!(json["PartnerTag"], "tag-22");
        assert_eq!(json["PartnerType"], "Associates");
        assert_eq!(json["Resources"].as_array().unwrap().len(), RESOURCES.len());
    }

    #[test]
    fn test_isbn_payload_strips_hyphens() {
        let request =
            build_request("978-4-10-101013-7", SearchType::Isbn, 10, "tag-22").unwrap();
        assert_eq!(request.operation, Operation::GetItems);

        let json: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(json["ItemIds"], serde_json::json!(["9784101010137"]));
        assert_eq!(json["IdType"], "ISBN");
        assert!(json.get("ItemCount").is_none());
    }

    #[test]
    fn test_item_count_clamped() {
        let request = build_request("test", SearchType::Keywords, 500, "tag").unwrap();
        let json: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(json["ItemCount"], 20);

        let request = build_request("test", SearchType::Keywords, 0, "tag").unwrap();
        let json: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(json["ItemCount"], 1);
    }
}
