//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::io::{self, Read};

/// The default member marker.
pub const M: &[u8] = &[0x00, 0x00, 0x1f, 0x8b];

/// Builds a stream of marker-prefixed payloads.
pub fn stream(payloads: &[&[u8]]) -> Vec<u8> {
    payloads.iter().flat_map(|p| [M, *p].concat()).collect()
}

/// Reader that injects faults into an inner reader.
pub struct FaultyReader<R: Read> {
    inner: R,
    mode: FaultMode,
    delivered: usize,
}

pub enum FaultMode {
    /// Never returns more than `n` bytes per read.
    ShortReads(usize),
    /// Fails with `kind` once `n` bytes have been delivered.
    FailAt(usize, io::ErrorKind),
}

impl<R: Read> FaultyReader<R> {
    pub fn new(inner: R, mode: FaultMode) -> Self {
        Self {
            inner,
            mode,
            delivered: 0,
        }
    }
}

impl<R: Read> Read for FaultyReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let limit = match self.mode {
            FaultMode::ShortReads(n) => n.min(buf.len()),
            FaultMode::FailAt(at, kind) => {
                if self.delivered >= at {
                    return Err(io::Error::new(kind, "injected fault"));
                }
                (at - self.delivered).min(buf.len())
            }
        };
        let n = self.inner.read(&mut buf[..limit])?;
        self.delivered += n;
        Ok(n)
    }
}
