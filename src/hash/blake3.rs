//! BLAKE3-based member hashing.

use crate::member::MemberHash;

/// Computes BLAKE3 digests of member bytes.
#[derive(Debug, Clone, Default)]
pub(crate) struct Blake3Hasher {
    state: ::blake3::Hasher,
}

impl Blake3Hasher {
    /// Creates a new hasher.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Updates the hasher with more data.
    pub(crate) fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    /// Finalizes and returns the hash.
    pub(crate) fn finalize(&self) -> MemberHash {
        MemberHash::new(self.state.finalize().into())
    }

    /// Hashes data in one shot.
    pub(crate) fn hash(data: &[u8]) -> MemberHash {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_matches_blake3() {
        let hash = Blake3Hasher::hash(b"\x00\x00\x1f\x8bAAA");
        let expected: [u8; 32] = ::blake3::hash(b"\x00\x00\x1f\x8bAAA").into();
        assert_eq!(hash.as_bytes(), &expected);
    }

    #[test]
    fn test_incremental_hashing() {
        let mut hasher = Blake3Hasher::new();
        hasher.update(b"\x00\x00");
        hasher.update(b"\x1f\x8bAAA");
        assert_eq!(hasher.finalize(), Blake3Hasher::hash(b"\x00\x00\x1f\x8bAAA"));
    }

    #[test]
    fn test_different_data_different_hash() {
        assert_ne!(Blake3Hasher::hash(b"member"), Blake3Hasher::hash(b"member!"));
    }
}
