//! Registered sensor key registry and RSA PEM key validation.
//!
//! This crate is the core of the sensor key registry service: a loader that
//! reads a fixed set of registered RSA public keys at process start, and a
//! validator that answers whether a caller-supplied PEM key exactly matches
//! one of them after canonical normalization.
//!
//! # Quick Start
//!
//! ```no_run
//! use sensorkey_registry::{validate_key, KeyRegistry, RegistryConfig};
//!
//! # fn example() -> sensorkey_registry::RegistryResult<()> {
//! // Load the registry once at startup
//! let registry = KeyRegistry::load(&RegistryConfig::from_env());
//!
//! // Validate candidate keys against the immutable snapshot
//! let verdict = validate_key("-----BEGIN PUBLIC KEY-----\n...", &registry)?;
//! println!("valid: {} ({})", verdict.is_valid, verdict.message);
//! # Ok(())
//! # }
//! ```
//!
//! Matching is exact byte equality after normalization, not mathematical key
//! equality: two PEM encodings of the same key that differ in line-wrap width
//! are distinct on purpose.
//!
//! The registry is an immutable snapshot. [`validate_key`] only ever takes a
//! shared reference and performs no I/O, so it is safe to call from
//! arbitrarily many concurrent requests without locking. A reload produces a
//! fresh snapshot rather than mutating in place.
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `SENSORKEY_KEYS_DIR` | Directory holding registered keys (default: `keys`) |
//! | `SENSORKEY_EXPECTED_KEYS` | Expected number of registered keys (default: 5) |

pub mod canonicalize;
mod digest;
pub mod error;
mod loader;
pub mod registry;
pub mod types;
pub mod validate;

// Re-export main types
pub use canonicalize::normalize_pem;
pub use digest::key_fingerprint;
pub use error::{RegistryError, RegistryResult};
pub use registry::{KeyRegistry, RegisteredKey};
pub use types::{
    RegisteredKeyItem, RegistryConfig, RegistryInfo, RegistryListing, ValidationRequest, Verdict,
};
pub use validate::validate_key;
