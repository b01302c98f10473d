// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Request signing for the Amazon PA-API pipeline
//!
//! Implements the AWS Signature v4 scheme: an HMAC-SHA256 key-derivation
//! chain scoped to (date, region, service) plus canonical request hashing.

pub mod sigv4;

pub use sigv4::{derive_signing_key, sha256_hex, sign_request, Operation, SignedRequest, SigningError};
