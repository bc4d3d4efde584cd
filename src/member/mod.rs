//! Member types.
//!
//! - [`Member`] - One marker-delimited sub-file with its stream position
//! - [`MemberHash`] - 32-byte BLAKE3 digest of a member

mod data;
mod hash;

pub use data::Member;
pub use hash::MemberHash;
