// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! PA-API response mapping
//!
//! Purely structural extraction from the raw response types into the flat
//! [`BookItem`] record. Mapping never fails; missing upstream fields become
//! absent fields, only the title gets a placeholder.

use super::types::{BookItem, ImageUrls, ListPrice, RawItem};

/// Placeholder when the upstream has no title for an item.
pub const UNKNOWN_TITLE: &str = "タイトル不明";

/// Map one raw upstream item into a normalized [`BookItem`].
pub fn map_item(raw: RawItem) -> BookItem {
    let item_info = raw.item_info;

    let title = item_info
        .title
        .and_then(|t| t.display_value)
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

    let authors: Vec<String> = item_info
        .by_line_info
        .contributors
        .into_iter()
        .filter_map(|c| c.name)
        .collect();

    let publisher = item_info
        .by_line_info
        .manufacturer
        .and_then(|m| m.display_value);

    // PublicationDate is preferred; ReleaseDate covers items that only
    // carry product info.
    let publication_date = item_info
        .content_info
        .publication_date
        .and_then(|d| d.display_value)
        .or_else(|| {
            item_info
                .product_info
                .release_date
                .and_then(|d| d.display_value)
        });

    let page_count = item_info.content_info.pages_count.and_then(|p| p.display_value);

    let is_kindle = item_info
        .classifications
        .binding
        .and_then(|b| b.display_value)
        .map(|b| b == "Kindle")
        .unwrap_or(false);

    let primary = raw.images.primary;
    let image_urls = ImageUrls {
        small: primary.small.and_then(|i| i.url),
        medium: primary.medium.and_then(|i| i.url),
        large: primary.large.and_then(|i| i.url),
    };

    let list_price = raw
        .offers
        .listings
        .into_iter()
        .next()
        .and_then(|l| l.price)
        .map(|p| ListPrice {
            amount: p.amount.unwrap_or(0.0),
            currency: p.currency.unwrap_or_default(),
        });

    let average_rating = raw
        .customer_reviews
        .star_rating
        .and_then(|r| r.average_rating);

    let sales_rank = raw
        .browse_node_info
        .website_sales_rank
        .and_then(|r| r.sales_rank);

    BookItem {
        asin: raw.asin.unwrap_or_default(),
        title,
        authors,
        publisher,
        publication_date,
        page_count,
        image_urls,
        average_rating,
        is_kindle,
        amazon_url: raw.detail_page_url,
        sales_rank,
        list_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_item_json() -> &'static str {
        r#"{
            "ASIN": "4101010137",
            "DetailPageURL": "https://www.amazon.co.jp/dp/4101010137",
            "ItemInfo": {
                "Title": { "DisplayValue": "人間失格" },
                "ByLineInfo": {
                    "Contributors": [
                        { "Name": "太宰 治" },
                        { "Name": null }
                    ],
                    "Manufacturer": { "DisplayValue": "新潮社" }
                },
                "ContentInfo": {
                    "PublicationDate": { "DisplayValue": "1952-01-01" },
                    "PagesCount": { "DisplayValue": 192 }
                },
                "Classifications": {
                    "Binding": { "DisplayValue": "文庫" }
                }
            },
            "Images": {
                "Primary": {
                    "Small": { "URL": "https://img.example/s.jpg" },
                    "Large": { "URL": "https://img.example/l.jpg" }
                }
            },
            "Offers": {
                "Listings": [
                    { "Price": { "Amount": 407.0, "Currency": "JPY" } }
                ]
            },
            "CustomerReviews": {
                "StarRating": { "AverageRating": 4.4 }
            },
            "BrowseNodeInfo": {
                "WebsiteSalesRank": { "SalesRank": 1200 }
            }
        }"#
    }

    #[test]
    fn test_map_full_item() {
        let raw: RawItem = serde_json::from_str(full_item_json()).unwrap();
        let item = map_item(raw);

        assert_eq!(item.asin, "4101010137");
        assert_eq!(item.title, "人間失格");
        assert_eq!(item.authors, vec!["太宰 治"]);
        assert_eq!(item.publisher.as_deref(), Some("新潮社"));
        assert_eq!(item.publication_date.as_deref(), Some("1952-01-01"));
        assert_eq!(item.page_count, Some(192));
        assert_eq!(item.image_urls.small.as_deref(), Some("https://img.example/s.jpg"));
        assert!(item.image_urls.medium.is_none());
        assert_eq!(item.average_rating, Some(4.4));
        assert!(!item.is_kindle);
        assert_eq!(item.sales_rank, Some(1200));
        let price = item.list_price.unwrap();
        assert_eq!(price.amount, 407.0);
        assert_eq!(price.currency, "JPY");
    }

    #[test]
    fn test_map_empty_item_defaults() {
        let raw: RawItem = serde_json::from_str("{}").unwrap();
        let item = map_item(raw);

        assert_eq!(item.asin, "");
        assert_eq!(item.title, UNKNOWN_TITLE);
        assert!(item.authors.is_empty());
        assert!(item.publisher.is_none());
        assert!(item.list_price.is_none());
        assert!(!item.is_kindle);
    }

    #[test]
    fn test_release_date_fallback() {
        let json = r#"{
            "ItemInfo": {
                "ProductInfo": { "ReleaseDate": { "DisplayValue": "2024-06-01" } }
            }
        }"#;
        let raw: RawItem = serde_json::from_str(json).unwrap();
        let item = map_item(raw);
        assert_eq!(item.publication_date.as_deref(), Some("2024-06-01"));
    }

    #[test]
    fn test_kindle_binding() {
        let json = r#"{
            "ItemInfo": {
                "Classifications": { "Binding": { "DisplayValue": "Kindle" } }
            }
        }"#;
        let raw: RawItem = serde_json::from_str(json).unwrap();
        assert!(map_item(raw).is_kindle);
    }
}
