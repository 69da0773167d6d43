//! `sensorkey info` - Registry introspection.

use anyhow::Result;

use sensorkey_registry::{KeyRegistry, RegistryConfig};

pub fn cmd_info(config: &RegistryConfig) -> i32 {
    match run_info(config) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {e:#}");
            1
        }
    }
}

fn run_info(config: &RegistryConfig) -> Result<()> {
    let registry = KeyRegistry::load(config);
    println!("{}", serde_json::to_string_pretty(&registry.info())?);
    Ok(())
}
