//! Registry loader: reads registered public keys from the keys directory.
//!
//! The on-disk layout is one PEM file per slot, `key_<i>_public.pem` for
//! `i` in `0..expected_count`. Absent slots are skipped silently: a registry
//! smaller than expected is a valid state, and the discrepancy is surfaced
//! through [`KeyRegistry::info`](crate::registry::KeyRegistry::info) instead
//! of failing startup.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::registry::RegisteredKey;

/// Public key file name for a registry slot.
pub(crate) fn key_file_name(slot: usize) -> String {
    format!("key_{slot}_public.pem")
}

/// Load registered keys from `keys_dir`, probing slots `0..expected_count`.
///
/// A missing directory yields an empty registry. Read failures other than
/// not-found are logged for that entry and loading continues.
pub(crate) fn load_keys(keys_dir: &Path, expected_count: usize) -> Vec<RegisteredKey> {
    let mut keys = Vec::new();

    if !keys_dir.exists() {
        info!(keys_dir = %keys_dir.display(), "keys directory does not exist, registry is empty");
        return keys;
    }

    for slot in 0..expected_count {
        let path = keys_dir.join(key_file_name(slot));
        match fs::read(&path) {
            Ok(bytes) => {
                debug!(slot, path = %path.display(), "loaded registered key");
                keys.push(RegisteredKey::new(keys.len(), bytes));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(slot, "no key file for slot, skipping");
            }
            Err(e) => {
                warn!(slot, error = %e, "failed to read key file, skipping entry");
            }
        }
    }

    info!(
        loaded = keys.len(),
        expected = expected_count,
        "registry loaded"
    );
    keys
}
