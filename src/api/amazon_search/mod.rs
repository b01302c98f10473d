// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Amazon PA-API search endpoint

pub mod handler;
pub mod request;
pub mod response;

pub use handler::amazon_search_handler;
pub use request::AmazonSearchRequest;
pub use response::AmazonSearchResponse;
