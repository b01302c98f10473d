// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Amazon PA-API pipeline (signed-request provider)
//!
//! Builds a provider-specific JSON payload, signs it (see [`crate::signing`]),
//! issues one HTTP call and maps the response into normalized book items.

pub mod client;
pub mod mapper;
pub mod request;
pub mod types;

pub use client::{PaapiClient, PaapiOutcome};
pub use request::{build_request, PaapiRequest};
pub use types::{BookItem, ImageUrls, ListPrice, PaapiError};
