// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! AWS Signature v4 signing for PA-API requests
//!
//! Every request carries an Authorization header derived from a per-request
//! signing key. The key is never the long-lived secret itself: it is the
//! result of a four-stage HMAC chain binding the signature to a date, a
//! region and the service name. The canonical request string must be
//! byte-identical to the headers sent on the wire or the upstream rejects
//! the signature.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";
const SERVICE: &str = "ProductAdvertisingAPI";
const TERMINATOR: &str = "aws4_request";
const API_PREFIX: &str = "/paapi5";
const TARGET_PREFIX: &str = "com.amazon.paapi5.v1.ProductAdvertisingAPIv1";

/// Content-Encoding value PA-API expects on signed requests.
pub const CONTENT_ENCODING: &str = "amz-1.0";
/// Content-Type value PA-API expects on signed requests.
pub const CONTENT_TYPE: &str = "application/json; charset=utf-8";

const SIGNED_HEADERS: &str = "content-encoding;content-type;host;x-amz-date;x-amz-target";

/// Errors from the signing pipeline.
///
/// Signing must never silently fall back to a wrong or empty key, so any
/// failure here aborts the request as an internal fault.
#[derive(Debug, Error)]
pub enum SigningError {
    /// The HMAC primitive rejected the key material
    #[error("invalid HMAC key: {0}")]
    InvalidKey(String),
}

/// PA-API operations the proxy issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Keyword search over the Books index
    SearchItems,
    /// Direct lookup by item id (ISBN)
    GetItems,
}

impl Operation {
    /// Operation name as it appears in the x-amz-target header.
    pub fn name(self) -> &'static str {
        match self {
            Operation::SearchItems => "SearchItems",
            Operation::GetItems => "GetItems",
        }
    }

    /// Canonical URI path, operation name lowercased.
    pub fn canonical_uri(self) -> String {
        format!("{}/{}", API_PREFIX, self.name().to_lowercase())
    }

    /// Fully-qualified x-amz-target value.
    pub fn target(self) -> String {
        format!("{}.{}", TARGET_PREFIX, self.name())
    }
}

/// A request ready to be sent: endpoint, headers and the exact body the
/// signature was computed over.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    /// Full https endpoint URL
    pub endpoint: String,
    /// x-amz-date header value (UTC, `YYYYMMDDTHHMMSSZ`)
    pub amz_date: String,
    /// x-amz-target header value
    pub target: String,
    /// Assembled Authorization header value
    pub authorization: String,
    /// Serialized JSON payload; must be sent unmodified
    pub body: String,
}

fn hmac_sha256(key: &[u8], data: &str) -> Result<Vec<u8>, SigningError> {
    let mut mac =
        HmacSha256::new_from_slice(key).map_err(|e| SigningError::InvalidKey(e.to_string()))?;
    mac.update(data.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Hex-encoded SHA-256 digest.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Derive the per-request signing key.
///
/// Strict nesting order, each stage's output keying the next:
/// `HMAC(HMAC(HMAC(HMAC("AWS4" + secret, date), region), service), "aws4_request")`.
pub fn derive_signing_key(
    secret: &str,
    date_stamp: &str,
    region: &str,
    service: &str,
) -> Result<Vec<u8>, SigningError> {
    let k_date = hmac_sha256(format!("AWS4{}", secret).as_bytes(), date_stamp)?;
    let k_region = hmac_sha256(&k_date, region)?;
    let k_service = hmac_sha256(&k_region, service)?;
    hmac_sha256(&k_service, TERMINATOR)
}

/// Sign a PA-API request payload.
///
/// `now` is passed in rather than read from the clock so the whole
/// construction is deterministic under test.
pub fn sign_request(
    body: &str,
    host: &str,
    region: &str,
    operation: Operation,
    access_key: &str,
    secret_key: &str,
    now: DateTime<Utc>,
) -> Result<SignedRequest, SigningError> {
    let date_stamp = now.format("%Y%m%d").to_string();
    let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();

    let canonical_uri = operation.canonical_uri();
    let target = operation.target();

    let canonical_headers = format!(
        "content-encoding:{}\ncontent-type:{}\nhost:{}\nx-amz-date:{}\nx-amz-target:{}\n",
        CONTENT_ENCODING, CONTENT_TYPE, host, amz_date, target
    );

    let payload_hash = sha256_hex(body.as_bytes());

    // The empty line after the URI is the (always empty) query string.
    let canonical_request = format!(
        "POST\n{}\n\n{}\n{}\n{}",
        canonical_uri, canonical_headers, SIGNED_HEADERS, payload_hash
    );

    let credential_scope = format!("{}/{}/{}/{}", date_stamp, region, SERVICE, TERMINATOR);
    let string_to_sign = format!(
        "{}\n{}\n{}\n{}",
        ALGORITHM,
        amz_date,
        credential_scope,
        sha256_hex(canonical_request.as_bytes())
    );

    let signing_key = derive_signing_key(secret_key, &date_stamp, region, SERVICE)?;
    let signature = hex::encode(hmac_sha256(&signing_key, &string_to_sign)?);

    let authorization = format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        ALGORITHM, access_key, credential_scope, SIGNED_HEADERS, signature
    );

    Ok(SignedRequest {
        endpoint: format!("https://{}{}", host, canonical_uri),
        amz_date,
        target,
        authorization,
        body: body.to_string(),
    })
}
