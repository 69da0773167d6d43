//! API types: validation requests, verdicts, introspection and configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A key validation request as submitted by an external caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRequest {
    /// Candidate public key, PEM text.
    pub public_key_pem: String,
}

/// Outcome of validating a candidate key against the registry.
///
/// Invariant: `key_index` is present if and only if `is_valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the candidate exactly matches a registered key.
    pub is_valid: bool,

    /// Index of the matching registered key, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_index: Option<usize>,

    /// Human-readable explanation of the outcome.
    pub message: String,
}

impl Verdict {
    /// Candidate matches the registered key at `index`.
    pub fn matched(index: usize) -> Self {
        Self {
            is_valid: true,
            key_index: Some(index),
            message: format!("Key matches registered key at index {index}"),
        }
    }

    /// Candidate is well-formed but matches no registered key.
    pub fn no_match() -> Self {
        Self {
            is_valid: false,
            key_index: None,
            message: "Public key does not match any registered keys".to_string(),
        }
    }

    /// The registry holds no keys at all. Kept distinguishable from
    /// [`Verdict::no_match`] so operators can tell misconfiguration from a
    /// genuinely unknown key.
    pub fn empty_registry() -> Self {
        Self {
            is_valid: false,
            key_index: None,
            message: "No registered keys found in the registry".to_string(),
        }
    }
}

/// Registry introspection summary: actual vs expected size and location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryInfo {
    /// Number of keys actually loaded.
    pub total_registered_keys: usize,

    /// Number of keys the configuration expects.
    pub expected_keys: usize,

    /// Directory the keys were loaded from.
    pub keys_directory: PathBuf,
}

/// One registry entry in a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredKeyItem {
    /// Position in load order (0-based).
    pub index: usize,

    /// Full PEM text as stored.
    pub key_pem: String,

    /// `sha256:<hex>` fingerprint of the normalized PEM.
    pub fingerprint: String,
}

/// Full registry listing. Discloses the entire trusted key set; boundary
/// layers should gate this behind admin access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryListing {
    /// All registered keys in index order.
    pub registered_keys: Vec<RegisteredKeyItem>,

    /// Number of entries.
    pub count: usize,
}

/// Loader configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Directory holding `key_<i>_public.pem` files.
    #[serde(default = "default_keys_dir")]
    pub keys_dir: PathBuf,

    /// Number of key slots to probe at load time.
    #[serde(default = "default_expected_count")]
    pub expected_count: usize,
}

fn default_keys_dir() -> PathBuf {
    PathBuf::from("keys")
}

fn default_expected_count() -> usize {
    5
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            keys_dir: default_keys_dir(),
            expected_count: default_expected_count(),
        }
    }
}

impl RegistryConfig {
    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `SENSORKEY_KEYS_DIR` | Keys directory |
    /// | `SENSORKEY_EXPECTED_KEYS` | Expected number of registered keys |
    pub fn from_env() -> Self {
        Self {
            keys_dir: std::env::var("SENSORKEY_KEYS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_keys_dir()),
            expected_count: std::env::var("SENSORKEY_EXPECTED_KEYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_expected_count),
        }
    }
}
