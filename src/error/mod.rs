//! Error and terminal-status types for gzsplit.

use std::io;
use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur while splitting a stream into members.
///
/// `ScanError` is cheap to clone: a scanner keeps a sticky copy of the error
/// that ended it and hands out clones to callers.
#[derive(Debug, Clone, Error)]
pub enum ScanError {
    /// The underlying source failed with something other than a clean end.
    #[error("io error: {0}")]
    Io(#[source] Arc<io::Error>),

    /// The member buffer grew past the configured limit.
    #[error("member too large: {actual} bytes (max {max})")]
    MemberTooLarge {
        /// The size the member buffer would have reached.
        actual: usize,
        /// The configured maximum member size.
        max: usize,
    },

    /// Invalid configuration parameter.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl ScanError {
    /// Returns the I/O error kind, if this is an I/O failure.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            ScanError::Io(e) => Some(e.kind()),
            _ => None,
        }
    }
}

impl From<io::Error> for ScanError {
    fn from(e: io::Error) -> Self {
        ScanError::Io(Arc::new(e))
    }
}

/// Terminal condition of a scanner.
///
/// A scanner starts [`Active`](ScanStatus::Active) and moves to exactly one
/// of the two terminal states, after which it never produces another member.
#[derive(Debug, Clone, Default)]
pub enum ScanStatus {
    /// More members may still be produced.
    #[default]
    Active,

    /// The source ended cleanly and every member has been delivered.
    Exhausted,

    /// Scanning stopped because of an error. Sticky.
    Failed(ScanError),
}

impl ScanStatus {
    /// Returns true while no terminal condition has been recorded.
    pub fn is_active(&self) -> bool {
        matches!(self, ScanStatus::Active)
    }

    /// Returns true if the source ended cleanly.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, ScanStatus::Exhausted)
    }

    /// Returns true if scanning stopped because of an error.
    pub fn is_failed(&self) -> bool {
        matches!(self, ScanStatus::Failed(_))
    }

    /// Returns the error that ended scanning, if any.
    ///
    /// Clean exhaustion is not an error and returns `None`.
    pub fn error(&self) -> Option<&ScanError> {
        match self {
            ScanStatus::Failed(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let err: ScanError = io_err.into();
        assert!(matches!(err, ScanError::Io(_)));
        assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display() {
        let err = ScanError::MemberTooLarge {
            actual: 100,
            max: 50,
        };
        assert_eq!(err.to_string(), "member too large: 100 bytes (max 50)");
        assert!(err.io_kind().is_none());
    }

    #[test]
    fn test_clone_shares_io_error() {
        let err: ScanError = io::Error::other("boom").into();
        let copy = err.clone();
        assert_eq!(err.to_string(), copy.to_string());
    }

    #[test]
    fn test_status() {
        let status = ScanStatus::default();
        assert!(status.is_active());
        assert!(status.error().is_none());

        assert!(ScanStatus::Exhausted.is_exhausted());
        assert!(ScanStatus::Exhausted.error().is_none());

        let failed = ScanStatus::Failed(io::Error::other("boom").into());
        assert!(failed.is_failed());
        assert!(!failed.is_active());
        assert!(failed.error().is_some());
    }
}
