//! The Member type - one marker-delimited sub-file of the stream.

use bytes::Bytes;
use std::fmt;
use std::ops::Range;

use super::MemberHash;

/// A member extracted from a concatenated stream.
///
/// `data` holds the member's exact bytes, starting with its marker (except a
/// first member whose stream does not start with one). Members are emitted in
/// stream order and their ranges tile the stream without gaps.
///
/// # Example
///
/// ```
/// use gzsplit::Member;
/// use bytes::Bytes;
///
/// let member = Member::new(Bytes::from_static(b"\x00\x00\x1f\x8bAAA"), 0, 0);
/// assert_eq!(member.len(), 7);
/// assert!(member.starts_with_marker(gzsplit::Marker::GZIP));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// The member bytes.
    pub data: Bytes,

    /// Stream offset of the member's first byte.
    pub offset: u64,

    /// Zero-based position of the member in the stream.
    pub index: u64,

    /// BLAKE3 digest of `data` (if hashing is enabled).
    pub hash: Option<MemberHash>,
}

impl Member {
    /// Creates a member without a hash.
    pub fn new(data: impl Into<Bytes>, offset: u64, index: u64) -> Self {
        Self {
            data: data.into(),
            offset,
            index,
            hash: None,
        }
    }

    /// Sets the hash.
    pub fn set_hash(mut self, hash: MemberHash) -> Self {
        self.hash = Some(hash);
        self
    }

    /// Returns the length of the member data.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the member has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the member data.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Returns the hash, if computed.
    pub fn hash(&self) -> Option<MemberHash> {
        self.hash
    }

    /// Returns the end offset (exclusive).
    pub fn end(&self) -> u64 {
        self.offset + self.data.len() as u64
    }

    /// Returns the member's byte range in the stream.
    pub fn range(&self) -> Range<u64> {
        self.offset..self.end()
    }

    /// Returns true if the member begins with `marker`.
    pub fn starts_with_marker(&self, marker: crate::Marker) -> bool {
        marker.is_prefix_of(&self.data)
    }

    /// Consumes the member and returns the underlying data.
    pub fn into_data(self) -> Bytes {
        self.data
    }
}

impl AsRef<[u8]> for Member {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Member #{}({} bytes @ {}", self.index, self.len(), self.offset)?;
        if let Some(hash) = self.hash {
            write!(f, ", hash={}", hash)?;
        }
        write!(f, ")")
    }
}
