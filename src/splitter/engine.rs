//! Core splitting engine - Splitter with a sans-I/O streaming API.
//!
//! [`Splitter`] owns all scan state and never touches a source itself:
//!
//! - `push()` - Feed freshly read bytes in any size (1 byte, 8KB, 1MB, etc.)
//! - `resume()` - Continue with bytes carried over from the previous boundary
//! - `finish()` - Flush the trailing member when the stream ends
//!
//! # Example
//!
//! ```
//! use gzsplit::{ScanConfig, Splitter};
//!
//! let mut splitter = Splitter::new(ScanConfig::default());
//!
//! // The leading marker of the stream is never a boundary
//! assert!(splitter.push(b"\x00\x00\x1f\x8bAAA\x00\x00")?.is_none());
//!
//! // Completing the second marker resolves the first member
//! let first = splitter.push(b"\x1f\x8bBB")?.expect("boundary");
//! assert_eq!(&first.data[..], b"\x00\x00\x1f\x8bAAA");
//!
//! // Bytes read past the boundary are carried into the next member
//! assert!(splitter.resume()?.is_none());
//! let last = splitter.finish()?.expect("trailing member");
//! assert_eq!(&last.data[..], b"\x00\x00\x1f\x8bBB");
//! # Ok::<(), gzsplit::ScanError>(())
//! ```

use bytes::BytesMut;
use log::debug;

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::hash::member_hash;
use crate::marker::{MARKER_LEN, MarkerMatcher};
use crate::member::Member;

/// A splitter that cuts a byte stream into marker-delimited members.
///
/// `Splitter` holds the member being assembled, the carry-over for the next
/// member and the marker match progress. Match progress persists across
/// calls, so a marker split over any number of pushes is still found.
///
/// # Determinism
///
/// Identical byte streams produce identical members regardless of how the
/// bytes are divided between `push()` calls.
///
/// # Carry-over
///
/// When a boundary is found, the marker and every byte pushed after it are
/// moved to the carry-over buffer; `push()` returns immediately. The next
/// `resume()` (or `push()`, which resumes first) seeds the new member with
/// the carry-over and scans the part that was not scanned yet, so one push
/// holding several members yields them one call at a time.
#[derive(Debug)]
pub struct Splitter {
    config: ScanConfig,
    matcher: MarkerMatcher,
    /// Bytes of the member being assembled.
    member: BytesMut,
    /// Bytes that belong to the next member.
    carry: BytesMut,
    /// Leading bytes of `carry` that were already scanned (the marker).
    carry_scanned: usize,
    /// Stream offset of the current member, i.e. total bytes emitted so far.
    offset: u64,
    members_emitted: u64,
}

impl Splitter {
    /// Creates a new splitter with the given configuration.
    ///
    /// The configuration is not validated here; readers that wrap a splitter
    /// validate it on construction.
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            matcher: MarkerMatcher::new(config.marker()),
            member: BytesMut::new(),
            carry: BytesMut::new(),
            carry_scanned: 0,
            offset: 0,
            members_emitted: 0,
        }
    }

    /// Pushes freshly read bytes and returns the member they complete, if any.
    ///
    /// If carry-over is still pending, `data` is queued behind it and the
    /// carry-over is resumed first.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::MemberTooLarge`] if the member would grow past
    /// the configured limit.
    pub fn push(&mut self, data: &[u8]) -> Result<Option<Member>, ScanError> {
        if !self.carry.is_empty() {
            self.carry.extend_from_slice(data);
            return self.resume();
        }
        self.scan(data)
    }

    /// Starts the next member from the carry-over left by the last boundary.
    ///
    /// Returns a member if the carried bytes already contain the next
    /// boundary; no new input is needed in that case. Returns `None` when
    /// there is no carry-over or all of it was absorbed into the current
    /// member.
    pub fn resume(&mut self) -> Result<Option<Member>, ScanError> {
        if self.carry.is_empty() {
            return Ok(None);
        }

        let mut seed = self.carry.split();
        let unscanned = seed.split_off(self.carry_scanned.min(seed.len()));
        self.carry_scanned = 0;

        self.check_limit(self.member.len() + seed.len())?;
        self.member.extend_from_slice(&seed);
        self.scan(&unscanned)
    }

    /// Finalizes the stream and returns the trailing member, if any.
    ///
    /// Call repeatedly until it returns `None`: pending carry-over may still
    /// hold more than one member.
    pub fn finish(&mut self) -> Result<Option<Member>, ScanError> {
        if let Some(member) = self.resume()? {
            return Ok(Some(member));
        }
        if self.member.is_empty() {
            return Ok(None);
        }

        self.matcher.reset();
        let member = self.emit();
        debug!(
            "end of stream: trailing member #{} ({} bytes)",
            member.index,
            member.len()
        );
        Ok(Some(member))
    }

    /// Splits an in-memory buffer and finishes the stream.
    ///
    /// # Example
    ///
    /// ```
    /// use gzsplit::{ScanConfig, Splitter};
    ///
    /// let stream = b"\x00\x00\x1f\x8bAAA\x00\x00\x1f\x8bBB";
    /// let members = Splitter::new(ScanConfig::default()).split_bytes(stream)?;
    ///
    /// assert_eq!(members.len(), 2);
    /// assert_eq!(members[1].offset, 7);
    /// # Ok::<(), gzsplit::ScanError>(())
    /// ```
    pub fn split_bytes(&mut self, data: &[u8]) -> Result<Vec<Member>, ScanError> {
        let mut members = Vec::new();

        let mut next = self.push(data)?;
        while let Some(member) = next {
            members.push(member);
            next = self.resume()?;
        }
        while let Some(member) = self.finish()? {
            members.push(member);
        }

        Ok(members)
    }

    /// Resets the splitter state for a new stream.
    pub fn reset(&mut self) {
        self.matcher.reset();
        self.member.clear();
        self.carry.clear();
        self.carry_scanned = 0;
        self.offset = 0;
        self.members_emitted = 0;
    }

    /// Returns the stream offset of the member being assembled.
    ///
    /// This equals the total number of bytes emitted in members so far.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the number of members emitted so far.
    pub fn members_emitted(&self) -> u64 {
        self.members_emitted
    }

    /// Returns the number of bytes buffered for the member being assembled.
    pub fn pending_len(&self) -> usize {
        self.member.len()
    }

    /// Returns the number of bytes carried over for the next member.
    pub fn carry_len(&self) -> usize {
        self.carry.len()
    }

    /// Returns how many marker bytes are currently matched (0..4).
    pub fn match_progress(&self) -> usize {
        self.matcher.progress()
    }

    /// Returns the configuration used by this splitter.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    fn scan(&mut self, data: &[u8]) -> Result<Option<Member>, ScanError> {
        let base = self.member.len();

        for (i, &byte) in data.iter().enumerate() {
            if !self.matcher.update(byte) {
                continue;
            }

            // Position of the marker's first byte in the member buffer. The
            // marker may have started in an earlier push, so the cut is taken
            // from the member buffer rather than from `data`.
            let cutoff = base + i + 1 - MARKER_LEN;
            if self.offset == 0 && cutoff == 0 {
                // leading marker of the stream
                continue;
            }

            self.check_limit(cutoff)?;
            self.member.extend_from_slice(&data[..=i]);
            let marker = self.member.split_off(cutoff);

            debug_assert!(self.carry.is_empty());
            self.carry.reserve(marker.len() + data.len() - i - 1);
            self.carry.extend_from_slice(&marker);
            self.carry.extend_from_slice(&data[i + 1..]);
            self.carry_scanned = marker.len();

            let member = self.emit();
            debug!(
                "boundary at offset {}: member #{} ({} bytes), {} bytes carried",
                member.end(),
                member.index,
                member.len(),
                self.carry.len()
            );
            return Ok(Some(member));
        }

        // Trailing bytes that may start the next marker are not counted yet.
        self.check_limit((base + data.len()).saturating_sub(self.matcher.progress()))?;
        self.member.extend_from_slice(data);
        Ok(None)
    }

    fn check_limit(&self, len: usize) -> Result<(), ScanError> {
        match self.config.max_member_size() {
            Some(max) if len > max => Err(ScanError::MemberTooLarge { actual: len, max }),
            _ => Ok(()),
        }
    }

    fn emit(&mut self) -> Member {
        let data = self.member.split().freeze();
        let hash = member_hash(self.config.hash_config(), &data);

        let member = Member {
            data,
            offset: self.offset,
            index: self.members_emitted,
            hash,
        };

        self.offset += member.len() as u64;
        self.members_emitted += 1;
        member
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}
