//! Reader-driven scanning - Scanner over any [`std::io::Read`] source.
//!
//! [`Scanner`] binds a [`Splitter`] to a source and a fixed-size read buffer.
//! It is driven either Go-style with [`Scanner::advance`] or as an
//! [`Iterator`] of `Result<Member, ScanError>`.
//!
//! # Example
//!
//! ```no_run
//! use std::fs::File;
//! use gzsplit::{ScanConfig, Scanner};
//!
//! let file = File::open("concatenated.gz")?;
//! let mut scanner = Scanner::new(file, ScanConfig::default())?;
//!
//! while scanner.advance() {
//!     println!("member: {} bytes", scanner.member_bytes().len());
//! }
//! if let Some(err) = scanner.err() {
//!     eprintln!("scanning failed: {}", err);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::Read;
use std::iter::FusedIterator;

use log::{trace, warn};

use super::Splitter;
use crate::config::ScanConfig;
use crate::error::{ScanError, ScanStatus};
use crate::member::Member;

/// Splits a byte source into members, one member per advance.
///
/// The scanner reads `read_size` bytes at a time into a reusable buffer and
/// stops reading as soon as a boundary is resolved; bytes read past the
/// boundary are kept for the next member and the rest of the source stays
/// unread.
///
/// Once the source ends or fails the scanner is done: the terminal condition
/// is available from [`Scanner::status`] and [`Scanner::err`], and a fresh
/// scanner is needed to scan again.
///
/// # Example
///
/// ```
/// use gzsplit::Scanner;
/// use std::io::Cursor;
///
/// let stream = b"\x00\x00\x1f\x8bAAA\x00\x00\x1f\x8bBB";
/// let members = Scanner::with_read_size(Cursor::new(&stream[..]), 3)?
///     .collect::<Result<Vec<_>, _>>()?;
///
/// assert_eq!(members.len(), 2);
/// assert_eq!(&members[0].data[..], b"\x00\x00\x1f\x8bAAA");
/// assert_eq!(&members[1].data[..], b"\x00\x00\x1f\x8bBB");
/// # Ok::<(), gzsplit::ScanError>(())
/// ```
#[derive(Debug)]
pub struct Scanner<R> {
    reader: R,
    splitter: Splitter,
    read_buf: Box<[u8]>,
    current: Option<Member>,
    status: ScanStatus,
    error_reported: bool,
}

impl<R: Read> Scanner<R> {
    /// Creates a scanner bound to `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidConfig`] if the configuration is invalid.
    pub fn new(reader: R, config: ScanConfig) -> Result<Self, ScanError> {
        config.validate()?;

        Ok(Self {
            reader,
            splitter: Splitter::new(config),
            read_buf: vec![0u8; config.read_size()].into_boxed_slice(),
            current: None,
            status: ScanStatus::Active,
            error_reported: false,
        })
    }

    /// Creates a scanner with the default configuration and the given read size.
    pub fn with_read_size(reader: R, read_size: usize) -> Result<Self, ScanError> {
        Self::new(reader, ScanConfig::default().with_read_size(read_size))
    }

    /// Advances to the next member.
    ///
    /// Returns true if a member is available through [`Scanner::member`].
    /// Returns false when there are no more members or the scanner failed;
    /// consult [`Scanner::err`] to tell the two apart.
    pub fn advance(&mut self) -> bool {
        self.current = None;
        if !self.status.is_active() {
            return false;
        }

        match self.next_member() {
            Ok(member) => {
                self.current = member;
                self.current.is_some()
            }
            Err(e) => {
                warn!(
                    "scanner failed after {} members at offset {}: {}",
                    self.splitter.members_emitted(),
                    self.splitter.offset(),
                    e
                );
                self.status = ScanStatus::Failed(e);
                false
            }
        }
    }

    fn next_member(&mut self) -> Result<Option<Member>, ScanError> {
        if let Some(member) = self.splitter.resume()? {
            return Ok(Some(member));
        }

        loop {
            let n = self.reader.read(&mut self.read_buf)?;
            trace!("read {} bytes at member offset {}", n, self.splitter.offset());

            if n == 0 {
                let last = self.splitter.finish()?;
                self.status = ScanStatus::Exhausted;
                return Ok(last);
            }

            if let Some(member) = self.splitter.push(&self.read_buf[..n])? {
                return Ok(Some(member));
            }
        }
    }
}

impl<R> Scanner<R> {
    /// Returns the member produced by the last successful advance.
    pub fn member(&self) -> Option<&Member> {
        self.current.as_ref()
    }

    /// Returns the bytes of the last produced member (empty if none).
    pub fn member_bytes(&self) -> &[u8] {
        match &self.current {
            Some(member) => &member.data[..],
            None => &[],
        }
    }

    /// Returns true while no terminal condition has been recorded.
    ///
    /// Performs no I/O: a scanner whose source is already drained still
    /// reports true until an advance observes the end.
    pub fn has_more(&self) -> bool {
        self.status.is_active()
    }

    /// Returns the scanner's terminal condition.
    pub fn status(&self) -> &ScanStatus {
        &self.status
    }

    /// Returns the error that stopped the scanner.
    ///
    /// Returns `None` while scanning and after clean exhaustion.
    pub fn err(&self) -> Option<&ScanError> {
        self.status.error()
    }

    /// Returns the stream offset of the next member.
    pub fn offset(&self) -> u64 {
        self.splitter.offset()
    }

    /// Returns the number of members produced so far.
    pub fn members_emitted(&self) -> u64 {
        self.splitter.members_emitted()
    }

    /// Returns the configuration used by this scanner.
    pub fn config(&self) -> &ScanConfig {
        self.splitter.config()
    }

    /// Returns a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Consumes the scanner and returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> Iterator for Scanner<R> {
    type Item = Result<Member, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            return self.current.clone().map(Ok);
        }

        match &self.status {
            ScanStatus::Failed(e) if !self.error_reported => {
                self.error_reported = true;
                Some(Err(e.clone()))
            }
            _ => None,
        }
    }
}

impl<R: Read> FusedIterator for Scanner<R> {}
