/// Machine fingerprinting for license requests
use sha2::{Digest, Sha256};

use super::sources::IdentifierSet;

/// Join identifiers as `name=value` pairs separated by `|`, in probe order
pub fn canonical_string(ids: &IdentifierSet) -> String {
    ids.iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("|")
}

/// Generate machine fingerprint
///
/// # Returns
/// Lowercase hex SHA256 of the canonical identifier string. With no
/// identifiers this is the digest of the empty string, which is valid but
/// not unique to the machine.
pub fn compute_fingerprint(ids: &IdentifierSet) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical_string(ids).as_bytes());
    hex::encode(hasher.finalize())
}
