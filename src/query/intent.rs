// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Author-intent classification
//!
//! Decides whether a search query looks like a person's name so the
//! orchestrator can try an author-filtered search first. This is a
//! heuristic gate, not a trained classifier; wrong guesses are corrected
//! by the keyword fallback.

use regex::Regex;
use std::sync::OnceLock;

/// Characters allowed in a name: CJK letters, any Unicode letter, the
/// middle-dot separator used in transliterated names, and whitespace.
fn author_charset() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[\p{Han}\p{Hiragana}\p{Katakana}\p{L}・\s]+$")
            .expect("author charset regex is valid")
    })
}

fn cjk_letters() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[\p{Han}\p{Hiragana}\p{Katakana}]").expect("CJK letter regex is valid")
    })
}

/// Heuristic check whether a query looks like an author name.
///
/// Rules, evaluated in order:
/// 1. queries shorter than 2 characters are not names;
/// 2. digits never appear in names;
/// 3. mixing Latin and CJK letters indicates a title, not a name;
/// 4. everything left must be letters, the middle dot or whitespace.
pub fn is_likely_author_query(query: &str) -> bool {
    let trimmed = query.trim();
    if trimmed.chars().count() < 2 {
        return false;
    }

    if trimmed.chars().any(|c| c.is_numeric()) {
        return false;
    }

    let has_latin = trimmed.chars().any(|c| c.is_ascii_alphabetic());
    let has_cjk = cjk_letters().is_match(trimmed);
    if has_latin && has_cjk {
        return false;
    }

    author_charset().is_match(trimmed)
}
