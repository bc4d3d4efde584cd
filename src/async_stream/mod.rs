//! Async streaming support for scanning.
//!
//! This module provides asynchronous scanning over `futures-io::AsyncRead`,
//! so it works with tokio, async-std, smol and other runtimes.
//!
//! - [`scan_async`] - Creates an async stream of members from an async reader
//!
//! This module requires the `async-io` feature to be enabled.

mod stream;

pub use stream::{MemberStream, scan_async};
