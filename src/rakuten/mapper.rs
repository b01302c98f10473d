// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Rakuten Books response mapping

use super::types::{RakutenBook, RawBook};

/// Placeholder when the upstream has no title for an item.
pub const UNKNOWN_TITLE: &str = "タイトル不明";

/// Map one raw upstream book into a normalized [`RakutenBook`].
///
/// Never fails; missing fields stay absent, only the title defaults.
pub fn map_item(raw: RawBook) -> RakutenBook {
    RakutenBook {
        title: raw.title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        author: raw.author,
        publisher_name: raw.publisher_name,
        sales_date: raw.sales_date,
        isbn: raw.isbn,
        item_caption: raw.item_caption,
        small_image_url: raw.small_image_url,
        medium_image_url: raw.medium_image_url,
        large_image_url: raw.large_image_url,
        item_url: raw.item_url,
    }
}
