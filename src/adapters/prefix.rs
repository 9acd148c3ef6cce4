use std::io::{self, ErrorKind};

use crate::stream::ByteSink;

/// Emits a fixed prefix before the first write and after every write that
/// ends in a newline.
///
/// The adapter keeps a single "prefix due" flag, true at construction. On
/// each write, a due prefix goes to the inner sink first; if that write
/// fails, the failure surfaces before any payload is attempted. The
/// returned count covers the payload only; prefix bytes are bookkeeping,
/// not payload.
///
/// A prefix is emitted once per newline-*terminated* write, not once per
/// physical line: a single call whose payload spans several interior
/// newlines gets one prefix. Callers wanting per-line prefixes must feed
/// newline-terminated chunks, as the tail follower does.
pub struct PrefixSink<D> {
    inner: D,
    prefix: Vec<u8>,
    prefix_due: bool,
}

impl<D> PrefixSink<D> {
    /// Wrap a sink with the given prefix.
    pub fn new(inner: D, prefix: impl Into<Vec<u8>>) -> Self {
        Self {
            inner,
            prefix: prefix.into(),
            prefix_due: true,
        }
    }

    /// Get a reference to the inner sink.
    pub fn get_ref(&self) -> &D {
        &self.inner
    }

    /// Unwrap the inner sink.
    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D: ByteSink> ByteSink for PrefixSink<D> {
    fn write_chunk(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.prefix_due {
            let accepted = self.inner.write_chunk(&self.prefix)?;
            if accepted < self.prefix.len() {
                // The prefix must land whole; a sink that truncates it has
                // broken the all-or-nothing expectation this adapter needs.
                return Err(io::Error::new(
                    ErrorKind::WriteZero,
                    "inner sink truncated the line prefix",
                ));
            }
            self.prefix_due = false;
        }
        let accepted = self.inner.write_chunk(buf)?;
        if buf[..accepted].last() == Some(&b'\n') {
            self.prefix_due = true;
        }
        Ok(accepted)
    }
}
