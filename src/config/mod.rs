//! Configuration for scanning behavior.
//!
//! This module provides types to configure how a stream is split:
//!
//! - [`ScanConfig`] - Read granularity, marker, member size limit and hashing
//! - [`HashConfig`] - Specifies whether to compute member hashes
//!
//! # Example
//!
//! ```
//! use gzsplit::{HashConfig, ScanConfig};
//!
//! // Custom read size
//! let config = ScanConfig::new(1024)?;
//!
//! // Enable hashing and bound member size
//! let config = ScanConfig::default()
//!     .with_hash_config(HashConfig::enabled())
//!     .with_max_member_size(Some(64 * 1024 * 1024));
//!
//! # Ok::<(), gzsplit::ScanError>(())
//! ```

use crate::error::ScanError;
use crate::marker::Marker;

/// Default read size (8 KiB).
pub const DEFAULT_READ_SIZE: usize = 8 * 1024;

/// Configuration for splitting a stream into members.
///
/// The read size only changes I/O granularity: member boundaries are the
/// same for every read size of at least one byte.
///
/// # Example
///
/// ```
/// use gzsplit::{Marker, ScanConfig};
///
/// let config = ScanConfig::default()
///     .with_read_size(4096)
///     .with_marker(Marker::GZIP);
/// assert_eq!(config.read_size(), 4096);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanConfig {
    /// Bytes requested from the source per read.
    read_size: usize,

    /// Sequence that starts every member.
    marker: Marker,

    /// Upper bound on a single member's buffered size.
    max_member_size: Option<usize>,

    /// Configuration for hashing behavior.
    hash_config: HashConfig,
}

impl ScanConfig {
    /// Creates a new configuration with the given read size.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidConfig`] if `read_size` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use gzsplit::ScanConfig;
    ///
    /// let config = ScanConfig::new(1024)?;
    /// assert_eq!(config.read_size(), 1024);
    /// assert!(ScanConfig::new(0).is_err());
    /// # Ok::<(), gzsplit::ScanError>(())
    /// ```
    pub fn new(read_size: usize) -> Result<Self, ScanError> {
        let config = Self::default().with_read_size(read_size);
        config.validate()?;
        Ok(config)
    }

    /// Sets the read size.
    ///
    /// Note: This does not validate the configuration. Use [`ScanConfig::validate`]
    /// to check if the configuration is valid.
    pub fn with_read_size(mut self, size: usize) -> Self {
        self.read_size = size;
        self
    }

    /// Sets the member marker.
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    /// Sets the maximum member size. `None` means unbounded.
    ///
    /// Note: This does not validate the configuration.
    pub fn with_max_member_size(mut self, size: Option<usize>) -> Self {
        self.max_member_size = size;
        self
    }

    /// Sets the hash configuration.
    pub fn with_hash_config(mut self, config: HashConfig) -> Self {
        self.hash_config = config;
        self
    }

    /// Returns the read size.
    pub fn read_size(&self) -> usize {
        self.read_size
    }

    /// Returns the member marker.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Returns the maximum member size, if bounded.
    pub fn max_member_size(&self) -> Option<usize> {
        self.max_member_size
    }

    /// Returns the hash configuration.
    pub fn hash_config(&self) -> &HashConfig {
        &self.hash_config
    }

    /// Validates the current configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use gzsplit::ScanConfig;
    ///
    /// let config = ScanConfig::default().with_read_size(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.read_size == 0 {
            return Err(ScanError::InvalidConfig {
                message: "read_size must be non-zero",
            });
        }

        if self.max_member_size == Some(0) {
            return Err(ScanError::InvalidConfig {
                message: "max_member_size must be non-zero",
            });
        }

        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            read_size: DEFAULT_READ_SIZE,
            marker: Marker::GZIP,
            max_member_size: None,
            hash_config: HashConfig::default(),
        }
    }
}

/// Configuration for member hashing behavior.
///
/// Controls whether BLAKE3 hashes are computed for each member. Hashing is
/// disabled by default; it also requires the `hash-blake3` feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HashConfig {
    /// Whether to compute BLAKE3 hashes for members.
    pub enabled: bool,
}

impl HashConfig {
    /// Creates a new hash configuration.
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Enables hashing.
    pub const fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Disables hashing.
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }
}
