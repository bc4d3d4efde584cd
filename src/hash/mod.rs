//! Strong hashing of emitted members.
//!
//! - [`Blake3Hasher`] - BLAKE3 implementation (requires `hash-blake3` feature)

#[cfg(feature = "hash-blake3")]
mod blake3;

#[cfg(feature = "hash-blake3")]
pub(crate) use self::blake3::Blake3Hasher;

use crate::config::HashConfig;
use crate::member::MemberHash;

/// Hashes a member's bytes if `config` asks for it and a hash backend is compiled in.
pub(crate) fn member_hash(config: &HashConfig, data: &[u8]) -> Option<MemberHash> {
    if !config.enabled {
        return None;
    }
    #[cfg(feature = "hash-blake3")]
    return Some(Blake3Hasher::hash(data));
    #[cfg(not(feature = "hash-blake3"))]
    {
        let _ = data;
        None
    }
}
