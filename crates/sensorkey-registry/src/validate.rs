//! Key validation: format check, normalization and registry comparison.

use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::pkcs8::DecodePublicKey;
use rsa::RsaPublicKey;
use spki::der::Document;
use spki::SubjectPublicKeyInfoRef;
use tracing::debug;

use crate::canonicalize::normalize_pem;
use crate::error::{RegistryError, RegistryResult};
use crate::registry::KeyRegistry;
use crate::types::Verdict;

/// PEM type label for SPKI public keys.
const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

/// rsaEncryption algorithm identifier.
const RSA_ENCRYPTION_OID: &str = "1.2.840.113549.1.1.1";

/// Validate a candidate PEM key against the registry.
///
/// Format failures come back as errors ([`RegistryError::InvalidKeyFormat`]
/// or [`RegistryError::UnsupportedKeyAlgorithm`]); every other outcome is a
/// [`Verdict`] value, including "no match" and "registry is empty".
///
/// Stateless and free of I/O: a pure function of `(candidate, registry)`,
/// safe to call concurrently against a shared registry snapshot.
pub fn validate_key(candidate: &str, registry: &KeyRegistry) -> RegistryResult<Verdict> {
    check_rsa_public_key(candidate)?;

    let needle = normalize_pem(candidate);

    if registry.is_empty() {
        debug!("registry is empty, rejecting candidate");
        return Ok(Verdict::empty_registry());
    }

    // First match in index order wins; with exact equality at most one entry
    // can match unless the registry itself holds duplicates.
    for key in registry.iter() {
        if normalize_pem(key.pem_text()?) == needle {
            debug!(index = key.index(), "candidate matches registered key");
            return Ok(Verdict::matched(key.index()));
        }
    }

    debug!("candidate matches no registered key");
    Ok(Verdict::no_match())
}

/// Confirm the candidate parses as an RSA public key.
///
/// Both SPKI (`BEGIN PUBLIC KEY`) and PKCS#1 (`BEGIN RSA PUBLIC KEY`)
/// encodings are accepted, matching what provisioning tools emit.
fn check_rsa_public_key(candidate: &str) -> RegistryResult<()> {
    if RsaPublicKey::from_public_key_pem(candidate).is_ok()
        || RsaPublicKey::from_pkcs1_pem(candidate).is_ok()
    {
        return Ok(());
    }

    // Not an RSA key. If the text is still a well-formed SPKI document,
    // report the algorithm instead of a generic parse failure.
    if let Ok((label, doc)) = Document::from_pem(candidate) {
        if label == PUBLIC_KEY_LABEL {
            if let Ok(info) = doc.decode_msg::<SubjectPublicKeyInfoRef<'_>>() {
                let oid = info.algorithm.oid.to_string();
                if oid != RSA_ENCRYPTION_OID {
                    return Err(RegistryError::UnsupportedKeyAlgorithm { oid });
                }
            }
        }
    }

    Err(RegistryError::InvalidKeyFormat {
        reason: "expected an RSA public key in PEM format".to_string(),
    })
}
