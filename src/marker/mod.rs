//! Member marker and the partial-match state machine.
//!
//! - [`Marker`] - The fixed 4-byte sequence that starts every member
//! - `MarkerMatcher` - O(1)-per-byte matcher whose progress survives across reads

use std::fmt;

/// Length of a member marker in bytes.
pub const MARKER_LEN: usize = 4;

/// The 4-byte sequence that signals the start of a new member.
///
/// # Example
///
/// ```
/// use gzsplit::Marker;
///
/// assert_eq!(Marker::GZIP.as_bytes(), &[0x00, 0x00, 0x1f, 0x8b]);
/// assert_eq!(Marker::default(), Marker::GZIP);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker([u8; MARKER_LEN]);

impl Marker {
    /// Two zero bytes followed by the gzip magic number.
    pub const GZIP: Marker = Marker([0x00, 0x00, 0x1f, 0x8b]);

    /// Creates a marker from raw bytes.
    pub const fn new(bytes: [u8; MARKER_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the marker bytes.
    pub const fn as_bytes(&self) -> &[u8; MARKER_LEN] {
        &self.0
    }

    /// Returns true if `data` begins with this marker.
    pub fn is_prefix_of(&self, data: &[u8]) -> bool {
        data.starts_with(&self.0)
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::GZIP
    }
}

impl AsRef<[u8]> for Marker {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Incremental matcher for a [`Marker`].
///
/// `progress` counts the marker bytes matched so far. On a mismatch the
/// matcher falls back to the longest marker prefix that is also a suffix of
/// the bytes seen, so a byte equal to the marker's first byte starts a new
/// candidate and `00 00 00 1f 8b` still matches the default marker.
#[derive(Debug, Clone)]
pub(crate) struct MarkerMatcher {
    marker: Marker,
    /// `fallback[i]`: progress to resume from after `i + 1` matched bytes.
    fallback: [usize; MARKER_LEN],
    progress: usize,
}

impl MarkerMatcher {
    pub(crate) fn new(marker: Marker) -> Self {
        Self {
            marker,
            fallback: Self::fallback_table(marker.as_bytes()),
            progress: 0,
        }
    }

    fn fallback_table(pattern: &[u8; MARKER_LEN]) -> [usize; MARKER_LEN] {
        let mut table = [0usize; MARKER_LEN];
        let mut k = 0;
        for i in 1..MARKER_LEN {
            while k > 0 && pattern[i] != pattern[k] {
                k = table[k - 1];
            }
            if pattern[i] == pattern[k] {
                k += 1;
            }
            table[i] = k;
        }
        table
    }

    /// Feeds one byte. Returns true when it completes the marker.
    ///
    /// A completed match resets progress to 0; matches never overlap.
    #[inline]
    pub(crate) fn update(&mut self, byte: u8) -> bool {
        let pattern = self.marker.as_bytes();
        while self.progress > 0 && byte != pattern[self.progress] {
            self.progress = self.fallback[self.progress - 1];
        }
        if byte == pattern[self.progress] {
            self.progress += 1;
        }
        if self.progress == MARKER_LEN {
            self.progress = 0;
            return true;
        }
        false
    }

    /// Number of marker bytes currently matched (0..4).
    pub(crate) fn progress(&self) -> usize {
        self.progress
    }

    pub(crate) fn reset(&mut self) {
        self.progress = 0;
    }
}
