//! `sensorkey keygen` - Generate an RSA keypair for a registry slot.

use std::fs;

use anyhow::{Context, Result};
use clap::Args;
use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::{RsaPrivateKey, RsaPublicKey};

use sensorkey_registry::{key_fingerprint, normalize_pem, RegistryConfig};

/// RSA modulus size for generated sensor keys.
const KEY_BITS: usize = 2048;

#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Registry slot index for the generated key
    #[arg(long)]
    pub index: usize,

    /// Force overwrite existing files
    #[arg(long, short)]
    pub force: bool,
}

pub fn cmd_keygen(args: &KeygenArgs, config: &RegistryConfig) -> i32 {
    match run_keygen(args, config) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {e:#}");
            1
        }
    }
}

fn run_keygen(args: &KeygenArgs, config: &RegistryConfig) -> Result<()> {
    if !config.keys_dir.exists() {
        fs::create_dir_all(&config.keys_dir).with_context(|| {
            format!("failed to create directory: {}", config.keys_dir.display())
        })?;
    }

    let private_path = config
        .keys_dir
        .join(format!("key_{}_private.pem", args.index));
    let public_path = config
        .keys_dir
        .join(format!("key_{}_public.pem", args.index));

    if !args.force {
        if private_path.exists() {
            anyhow::bail!(
                "private key already exists: {} (use --force to overwrite)",
                private_path.display()
            );
        }
        if public_path.exists() {
            anyhow::bail!(
                "public key already exists: {} (use --force to overwrite)",
                public_path.display()
            );
        }
    }

    let private_key = RsaPrivateKey::new(&mut rand::thread_rng(), KEY_BITS)
        .context("failed to generate RSA key")?;
    let public_key = RsaPublicKey::from(&private_key);

    let private_pem = private_key
        .to_pkcs8_pem(LineEnding::LF)
        .context("failed to encode private key as PKCS#8 PEM")?;
    let public_pem = public_key
        .to_public_key_pem(LineEnding::LF)
        .context("failed to encode public key as SPKI PEM")?;

    fs::write(&private_path, private_pem.as_bytes())
        .with_context(|| format!("failed to write private key: {}", private_path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(0o600);
        fs::set_permissions(&private_path, perms)
            .with_context(|| format!("failed to set permissions on: {}", private_path.display()))?;
    }

    fs::write(&public_path, &public_pem)
        .with_context(|| format!("failed to write public key: {}", public_path.display()))?;

    println!("Generated RSA keypair for registry slot {}:", args.index);
    println!(
        "  Private key: {} (PKCS#8 PEM, mode 0600)",
        private_path.display()
    );
    println!("  Public key:  {} (SPKI PEM)", public_path.display());
    println!();
    println!(
        "fingerprint: {}",
        key_fingerprint(&normalize_pem(&public_pem))
    );

    if args.index >= config.expected_count {
        println!();
        println!(
            "note: slot {} is outside the expected range 0..{} and will not be loaded",
            args.index, config.expected_count
        );
    }

    Ok(())
}
