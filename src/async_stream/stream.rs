//! Async stream adapter for scanning.
//!
//! # Example
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
//!         println!("member: {} bytes", member.len());
//!     }
//!     Ok(())
//! }
//! ```

use std::pin::Pin;
use std::task::{Context, Poll, ready};

use futures_core::Stream;
use futures_core::stream::FusedStream;
use futures_io::AsyncRead;
use log::{trace, warn};
use pin_project_lite::pin_project;

use crate::config::ScanConfig;
use crate::error::{ScanError, ScanStatus};
use crate::member::Member;
use crate::splitter::Splitter;

pin_project! {
    /// A stream that yields members from an async reader.
    ///
    /// Same boundaries and terminal conditions as [`crate::Scanner`]: a
    /// failure is yielded once as `Err`, then the stream ends and
    /// [`MemberStream::status`] keeps reporting it.
    pub struct MemberStream<R> {
        #[pin]
        reader: R,
        splitter: Splitter,
        read_buf: Box<[u8]>,
        status: ScanStatus,
    }
}

impl<R: AsyncRead> MemberStream<R> {
    /// Creates a member stream from an async reader.
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
            status: ScanStatus::Active,
        })
    }

    fn poll_member(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Result<Option<Member>, ScanError>> {
        let mut this = self.project();

        if let Some(member) = this.splitter.resume()? {
            return Poll::Ready(Ok(Some(member)));
        }

        loop {
            let n = ready!(this.reader.as_mut().poll_read(cx, &mut this.read_buf[..]))?;
            trace!("read {} bytes at member offset {}", n, this.splitter.offset());

            if n == 0 {
                let last = this.splitter.finish()?;
                *this.status = ScanStatus::Exhausted;
                return Poll::Ready(Ok(last));
            }

            if let Some(member) = this.splitter.push(&this.read_buf[..n])? {
                return Poll::Ready(Ok(Some(member)));
            }
        }
    }
}

impl<R> MemberStream<R> {
    /// Returns true while no terminal condition has been recorded.
    pub fn has_more(&self) -> bool {
        self.status.is_active()
    }

    /// Returns the stream's terminal condition.
    pub fn status(&self) -> &ScanStatus {
        &self.status
    }

    /// Returns the error that stopped the stream, if any.
    pub fn err(&self) -> Option<&ScanError> {
        self.status.error()
    }

    /// Returns the number of members produced so far.
    pub fn members_emitted(&self) -> u64 {
        self.splitter.members_emitted()
    }

    /// Consumes the stream and returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: AsyncRead> Stream for MemberStream<R> {
    type Item = Result<Member, ScanError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if !self.status.is_active() {
            return Poll::Ready(None);
        }

        match ready!(self.as_mut().poll_member(cx)) {
            Ok(member) => Poll::Ready(member.map(Ok)),
            Err(e) => {
                warn!(
                    "member stream failed after {} members: {}",
                    self.splitter.members_emitted(),
                    e
                );
                *self.as_mut().project().status = ScanStatus::Failed(e.clone());
                Poll::Ready(Some(Err(e)))
            }
        }
    }
}

impl<R: AsyncRead> FusedStream for MemberStream<R> {
    fn is_terminated(&self) -> bool {
        !self.status.is_active()
    }
}

/// Creates a member stream from an async reader.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O. Tokio users
/// can convert a `tokio::io::AsyncRead` with `tokio_util::compat`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use gzsplit::{scan_async, ScanConfig};
///
/// let file = tokio::fs::File::open("concatenated.gz").await?;
/// let stream = scan_async(file.compat(), ScanConfig::default())?;
/// ```
pub fn scan_async<R: AsyncRead>(reader: R, config: ScanConfig) -> Result<MemberStream<R>, ScanError> {
    MemberStream::new(reader, config)
}
