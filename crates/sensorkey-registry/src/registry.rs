//! Immutable registry snapshot of registered sensor keys.

use crate::canonicalize::normalize_pem;
use crate::digest::key_fingerprint;
use crate::error::{RegistryError, RegistryResult};
use crate::loader;
use crate::types::{RegisteredKeyItem, RegistryConfig, RegistryInfo, RegistryListing};

/// One registered public key, as read from storage.
#[derive(Debug, Clone)]
pub struct RegisteredKey {
    index: usize,
    pem: Vec<u8>,
}

impl RegisteredKey {
    pub(crate) fn new(index: usize, pem: Vec<u8>) -> Self {
        Self { index, pem }
    }

    /// Position in load order (0-based), stable for the process lifetime.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Raw PEM bytes as read from storage, not normalized.
    pub fn pem_bytes(&self) -> &[u8] {
        &self.pem
    }

    /// PEM text. Registry entries must be UTF-8; a binary entry is a
    /// corrupted read and surfaces as an opaque internal error.
    pub(crate) fn pem_text(&self) -> RegistryResult<&str> {
        std::str::from_utf8(&self.pem).map_err(|_| RegistryError::Internal {
            message: format!("registered key {} is not valid UTF-8", self.index),
        })
    }
}

/// Immutable, ordered set of registered keys plus its load configuration.
///
/// Built once at startup by [`KeyRegistry::load`] and then only ever read:
/// validation takes `&KeyRegistry`, so concurrent callers need no locking.
/// Reloading means building a fresh snapshot and swapping the reference, not
/// mutating entries in place.
#[derive(Debug, Clone)]
pub struct KeyRegistry {
    keys: Vec<RegisteredKey>,
    config: RegistryConfig,
}

impl KeyRegistry {
    /// Load the registry from the configured keys directory.
    pub fn load(config: &RegistryConfig) -> Self {
        let keys = loader::load_keys(&config.keys_dir, config.expected_count);
        Self {
            keys,
            config: config.clone(),
        }
    }

    /// Build a registry directly from raw PEM entries, in index order.
    ///
    /// Intended for tests and embedders that source keys elsewhere.
    pub fn from_entries(config: &RegistryConfig, entries: Vec<Vec<u8>>) -> Self {
        let keys = entries
            .into_iter()
            .enumerate()
            .map(|(index, pem)| RegisteredKey::new(index, pem))
            .collect();
        Self {
            keys,
            config: config.clone(),
        }
    }

    /// Number of loaded keys (may be smaller than the expected count).
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no keys were loaded. A valid state, not an error.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The registered key at `index`, if loaded.
    pub fn get(&self, index: usize) -> Option<&RegisteredKey> {
        self.keys.get(index)
    }

    /// Iterate registered keys in index order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredKey> {
        self.keys.iter()
    }

    /// Introspection summary: actual vs expected count and storage location.
    ///
    /// The expected/actual discrepancy is how operators detect misconfigured
    /// key directories, since the loader itself never fails on absent slots.
    pub fn info(&self) -> RegistryInfo {
        RegistryInfo {
            total_registered_keys: self.keys.len(),
            expected_keys: self.config.expected_count,
            keys_directory: self.config.keys_dir.clone(),
        }
    }

    /// Full listing with fingerprints, in index order.
    ///
    /// Discloses the entire trusted key set; boundary layers should treat
    /// this as admin-only.
    pub fn listing(&self) -> RegistryResult<RegistryListing> {
        let mut registered_keys = Vec::with_capacity(self.keys.len());
        for key in &self.keys {
            let pem = key.pem_text()?;
            registered_keys.push(RegisteredKeyItem {
                index: key.index(),
                key_pem: pem.to_string(),
                fingerprint: key_fingerprint(&normalize_pem(pem)),
            });
        }
        Ok(RegistryListing {
            count: registered_keys.len(),
            registered_keys,
        })
    }
}
