use sha2::{Digest, Sha256};

/// Fingerprint of a key: `sha256:<lowercase-hex>` over the normalized PEM
/// bytes.
///
/// Lets operators reference registry entries in logs and listings without
/// reproducing the full key text.
pub fn key_fingerprint(normalized_pem: &str) -> String {
    sha256_hex_bytes(normalized_pem.as_bytes())
}

pub(crate) fn sha256_hex_bytes(bytes: &[u8]) -> String {
    format!("sha256:{:x}", Sha256::digest(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_shape() {
        let fp = key_fingerprint("-----BEGIN PUBLIC KEY-----\nAQAB\n-----END PUBLIC KEY-----\n");
        assert!(fp.starts_with("sha256:"));
        assert_eq!(fp.len(), "sha256:".len() + 64);
    }

    #[test]
    fn fingerprint_is_deterministic_and_content_sensitive() {
        let a = key_fingerprint("a\n");
        assert_eq!(a, key_fingerprint("a\n"));
        assert_ne!(a, key_fingerprint("b\n"));
    }

    #[test]
    fn empty_input_digest_matches_known_vector() {
        assert_eq!(
            sha256_hex_bytes(b""),
            "sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
