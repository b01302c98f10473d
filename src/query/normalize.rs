// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search query normalization

/// Normalize a raw search query.
///
/// Trims leading/trailing whitespace, converts the full-width space
/// (U+3000) to a regular space and collapses whitespace runs to a single
/// space. With `isbn` set, all hyphens are removed so formatted ISBNs
/// (`978-4-...`) match the upstream's unformatted index.
///
/// Pure and total; normalizing twice gives the same result.
pub fn normalize_query(raw: &str, isbn: bool) -> String {
    // split_whitespace trims and treats U+3000 as whitespace, so trimming,
    // full-width conversion and run collapsing happen in one pass.
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    if isbn {
        collapsed.replace('-', "")
    } else {
        collapsed
    }
}
