//! CLI argument definitions and command dispatch.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use sensorkey_registry::RegistryConfig;

mod info;
mod keygen;
mod list;
mod validate;

/// Validate sensor public keys against the registered key set.
#[derive(Parser, Debug)]
#[command(name = "sensorkey", version, about)]
pub struct Cli {
    /// Directory holding registered public keys
    #[arg(
        long,
        env = "SENSORKEY_KEYS_DIR",
        default_value = "keys",
        global = true
    )]
    pub keys_dir: PathBuf,

    /// Expected number of registered keys
    #[arg(
        long,
        env = "SENSORKEY_EXPECTED_KEYS",
        default_value_t = 5,
        global = true
    )]
    pub expected_count: usize,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a candidate public key against the registry
    Validate(validate::ValidateArgs),
    /// Show registry size, expected count and storage location
    Info,
    /// List all registered keys (admin use; discloses the trusted key set)
    List,
    /// Generate an RSA keypair for a registry slot
    Keygen(keygen::KeygenArgs),
}

pub fn dispatch(cli: Cli) -> i32 {
    let config = RegistryConfig {
        keys_dir: cli.keys_dir,
        expected_count: cli.expected_count,
    };

    match cli.command {
        Command::Validate(args) => validate::cmd_validate(&args, &config),
        Command::Info => info::cmd_info(&config),
        Command::List => list::cmd_list(&config),
        Command::Keygen(args) => keygen::cmd_keygen(&args, &config),
    }
}

/// Map an error to its exit code, honoring `RegistryError::exit_code` when
/// the chain bottoms out in a registry error.
pub(crate) fn error_exit_code(e: &anyhow::Error) -> i32 {
    match e.downcast_ref::<sensorkey_registry::RegistryError>() {
        Some(err) => err.exit_code(),
        None => 1,
    }
}
