//! gzsplit
//!
//! Streaming splitter for concatenated, marker-prefixed members.
//!
//! `gzsplit` walks a byte stream built by gluing many compressed payloads
//! together, each prefixed by the marker `00 00 1f 8b`, and yields one member
//! at a time. It is designed as a small, composable primitive for:
//!
//! - processing archives of concatenated gzip members
//! - re-sharding member streams
//! - feeding members to a decompressor one by one
//!
//! The crate intentionally:
//! - does NOT decompress or validate members
//! - does NOT seek (forward-only sources)
//! - does NOT manage files, sockets or concurrency
//!
//! It only does one thing: **Read bytes → yield members**
//!
//! Framing is lossless: the members, in order, concatenate back to the
//! stream. Boundaries do not depend on the read size.
//!
//! # Sync
//!
//! ```no_run
//! use std::fs::File;
//! use gzsplit::{ScanConfig, ScanError, Scanner};
//!
//! fn main() -> Result<(), ScanError> {
//!     let file = File::open("concatenated.gz")?;
//!
//!     for member in Scanner::new(file, ScanConfig::default())? {
//!         let member = member?;
//!         println!("member {} bytes @ {}", member.len(), member.offset);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use gzsplit::{scan_async, ScanConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R) -> Result<(), gzsplit::ScanError> {
//!     let mut stream = scan_async(reader, ScanConfig::default())?;
//!
//!     while let Some(member) = stream.next().await {
//!         let member = member?;
//!         println!("member {}", member.len());
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod marker;
mod member;
mod splitter;

mod hash; // internal blake3 impl

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface (intentionally tiny)
//

pub use config::{DEFAULT_READ_SIZE, HashConfig, ScanConfig};
pub use error::{ScanError, ScanStatus};
pub use marker::{MARKER_LEN, Marker};
pub use member::{Member, MemberHash};
pub use splitter::{Scanner, Splitter};

#[cfg(feature = "async-io")]
pub use async_stream::{MemberStream, scan_async};
