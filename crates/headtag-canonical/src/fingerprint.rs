//! Canonical bytes and digests over tag lists.
//!
//! A fingerprint is computed as `sha256(domain_separator || canonical_bytes(tags))`,
//! where the canonical bytes are the RFC 8785 JSON form of the tag list. Two
//! renders with the same tags in the same order share a fingerprint regardless
//! of how their props were ordered.

use canonical_json::to_string;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest as Sha2Digest, Sha256};
use std::fmt;
use std::sync::OnceLock;

use crate::tag::CanonicalTag;
use crate::validation::ValidationError;

/// Domain separator for tag-list fingerprints: `b"headtag:tags:v1\0"`.
const TAGS_DOMAIN_SEPARATOR: &[u8] = b"headtag:tags:v1\0";

/// Hash function behind a [`Digest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigestAlg {
    /// Serialized as `sha-256`.
    #[serde(rename = "sha-256")]
    Sha256,
}

/// Fingerprint of a rendered tag list.
///
/// `b64` is the unpadded base64url hash; a SHA-256 hash is always 43 chars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digest {
    /// Hash function used.
    pub alg: DigestAlg,
    /// Unpadded base64url hash bytes.
    pub b64: String,
}

fn b64_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]{43,44}$").expect("invalid regex"))
}

impl Digest {
    /// Wraps an encoded hash, rejecting anything that is not unpadded base64url
    /// of SHA-256 length (e.g. a digest pasted from a previous render).
    pub fn new(alg: DigestAlg, b64: impl Into<String>) -> Result<Self, ValidationError> {
        let b64 = b64.into();
        if b64_shape().is_match(&b64) {
            Ok(Self { alg, b64 })
        } else {
            Err(ValidationError::Malformed {
                what: "digest",
                value: b64,
            })
        }
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sha-256:{}", self.b64)
    }
}

/// Error returned when a tag list cannot be fingerprinted.
#[derive(thiserror::Error, Debug)]
pub enum FingerprintError {
    /// Tags could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
    /// The JSON form could not be canonicalized.
    #[error("canonicalization failed: {0}")]
    Canonicalization(String),
    /// The computed digest failed validation.
    #[error("invalid digest: {0}")]
    Validation(#[from] ValidationError),
}

/// RFC 8785 canonical JSON bytes of a tag list.
pub fn canonical_bytes(tags: &[CanonicalTag]) -> Result<Vec<u8>, FingerprintError> {
    let value =
        serde_json::to_value(tags).map_err(|e| FingerprintError::Serialization(e.to_string()))?;
    let canonical =
        to_string(&value).map_err(|err| FingerprintError::Canonicalization(err.to_string()))?;
    Ok(canonical.into_bytes())
}

/// Computes the fingerprint of a tag list.
///
/// # Example
///
/// ```rust
/// use headtag_canonical::{fingerprint, normalize_tag};
/// use serde_json::json;
///
/// let tags = normalize_tag("meta", &json!({"name": "robots", "content": "index"})).into_vec();
/// let digest = fingerprint(&tags)?;
/// assert_eq!(digest.b64.len(), 43);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn fingerprint(tags: &[CanonicalTag]) -> Result<Digest, FingerprintError> {
    let bytes = canonical_bytes(tags)?;

    let mut hasher = Sha256::new();
    hasher.update(TAGS_DOMAIN_SEPARATOR);
    hasher.update(&bytes);
    let hash_bytes = hasher.finalize();

    use base64::Engine;
    let b64 = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(hash_bytes);
    Ok(Digest::new(DigestAlg::Sha256, b64)?)
}
