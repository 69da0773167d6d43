//! `sensorkey validate` - Validate a candidate key against the registry.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use sensorkey_registry::{validate_key, KeyRegistry, RegistryConfig};

use super::error_exit_code;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Candidate public key file (PEM), or `-` for stdin
    pub key: PathBuf,

    /// Quiet mode - only exit code, no output
    #[arg(long, short)]
    pub quiet: bool,
}

pub fn cmd_validate(args: &ValidateArgs, config: &RegistryConfig) -> i32 {
    match run_validate(args, config) {
        // 0 when the key is registered, 1 when it is not
        Ok(valid) => i32::from(!valid),
        Err(e) => {
            if !args.quiet {
                eprintln!("error: {e:#}");
            }
            error_exit_code(&e)
        }
    }
}

fn run_validate(args: &ValidateArgs, config: &RegistryConfig) -> Result<bool> {
    let candidate = read_candidate(&args.key)?;
    let registry = KeyRegistry::load(config);
    let verdict = validate_key(&candidate, &registry)?;

    if !args.quiet {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    }

    Ok(verdict.is_valid)
}

fn read_candidate(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read candidate key from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read candidate key: {}", path.display()))
    }
}
