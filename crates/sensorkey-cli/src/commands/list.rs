//! `sensorkey list` - Dump the full registry.
//!
//! Prints every registered key with its index and fingerprint. This
//! discloses the whole trusted key set, so production deployments should
//! restrict who can run it.

use anyhow::Result;

use sensorkey_registry::{KeyRegistry, RegistryConfig};

use super::error_exit_code;

pub fn cmd_list(config: &RegistryConfig) -> i32 {
    match run_list(config) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {e:#}");
            error_exit_code(&e)
        }
    }
}

fn run_list(config: &RegistryConfig) -> Result<()> {
    let registry = KeyRegistry::load(config);
    let listing = registry.listing()?;
    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}
