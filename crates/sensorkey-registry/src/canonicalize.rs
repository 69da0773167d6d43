//! PEM text canonicalization for registry comparison.
//!
//! Raw byte comparison of PEM files is fragile: trailing blank lines, CRLF
//! line endings and per-line padding all vary between provisioning tools.
//! The canonical form trims every line, drops lines that become empty, joins
//! the survivors with a single `\n` and ends in exactly one trailing newline.

/// Canonicalize PEM text for exact comparison.
///
/// Pure and idempotent; applied identically to candidates and registry
/// entries, and knows nothing about key validity.
pub fn normalize_pem(pem: &str) -> String {
    let mut normalized = pem
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    normalized.push('\n');
    normalized
}
