//! Content hashing used as memoization keys.

use sha2::{Digest, Sha256};

/// Incremental SHA-256 over an ordered list of text parts.
#[derive(Clone, Default)]
pub struct Fingerprint {
    hasher: Sha256,
}

impl Fingerprint {
    /// Starts an empty fingerprint.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one part, prefixed with its byte length.
    pub fn push(&mut self, part: &str) -> &mut Self {
        self.hasher.update((part.len() as u64).to_le_bytes());
        self.hasher.update(part.as_bytes());
        self
    }

    /// Returns the lowercase hex digest.
    #[must_use]
    pub fn finish(self) -> String {
        hex::encode(self.hasher.finalize())
    }
}

/// Hashes an ordered list of key parts.
#[must_use]
pub fn of_parts(parts: &[&str]) -> String {
    let mut fingerprint = Fingerprint::new();
    for part in parts {
        fingerprint.push(part);
    }
    fingerprint.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_parts_is_stable() {
        assert_eq!(of_parts(&["a", "b"]), of_parts(&["a", "b"]));
        assert_eq!(of_parts(&["a"]).len(), 64);
    }

    #[test]
    fn test_of_parts_respects_boundaries() {
        assert_ne!(of_parts(&["ab", "c"]), of_parts(&["a", "bc"]));
        assert_ne!(of_parts(&["a", "b"]), of_parts(&["b", "a"]));
        assert_ne!(of_parts(&["a\u{1f}", "b"]), of_parts(&["a", "\u{1f}b"]));
        assert_ne!(of_parts(&["", "ab"]), of_parts(&["ab", ""]));
    }

    #[test]
    fn test_builder_matches_of_parts() {
        let mut fingerprint = Fingerprint::new();
        fingerprint.push("left").push("right");
        assert_eq!(fingerprint.finish(), of_parts(&["left", "right"]));
    }
}
