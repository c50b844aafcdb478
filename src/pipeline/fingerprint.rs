// src/pipeline/fingerprint.rs

//! Content fingerprinting.
//!
//! A digest over the raw document bytes lets a cycle skip parsing entirely
//! when nothing changed. The digest is a change-detection optimization, not
//! a trust boundary.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of `content`, lowercase hex encoded.
pub fn fingerprint(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_deterministic() {
        assert_eq!(fingerprint(b"<html></html>"), fingerprint(b"<html></html>"));
    }

    #[test]
    fn single_character_edit_changes_digest() {
        assert_ne!(fingerprint(b"<html>a</html>"), fingerprint(b"<html>b</html>"));
    }

    #[test]
    fn known_empty_digest() {
        assert_eq!(
            fingerprint(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
