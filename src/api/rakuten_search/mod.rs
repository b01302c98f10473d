// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Rakuten Books search endpoint

pub mod handler;
pub mod request;

pub use handler::rakuten_search_handler;
pub use request::RakutenSearchRequest;
