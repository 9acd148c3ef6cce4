use std::io;

use crate::stream::{ByteSource, ReadChunk};

/// Rewrites ASCII lowercase bytes (`a`–`z`) to their uppercase
/// counterparts as they are read.
///
/// The mapping happens in place in the caller's buffer after delegating to
/// the inner source. It is pure ASCII: no locale, no multi-byte awareness;
/// every other byte passes through untouched, so UTF-8 continuation bytes
/// are never mangled. End-of-stream propagates unchanged.
pub struct UppercaseSource<S> {
    inner: S,
}

impl<S> UppercaseSource<S> {
    /// Wrap a source.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Unwrap the inner source.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ByteSource> ByteSource for UppercaseSource<S> {
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<ReadChunk> {
        let outcome = self.inner.read_chunk(buf)?;
        if let ReadChunk::Data(n) = outcome {
            buf[..n].make_ascii_uppercase();
        }
        Ok(outcome)
    }
}

/// The opposite mapping: ASCII uppercase bytes become lowercase as they
/// are read. Same contract as [`UppercaseSource`] otherwise.
pub struct LowercaseSource<S> {
    inner: S,
}

impl<S> LowercaseSource<S> {
    /// Wrap a source.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Unwrap the inner source.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ByteSource> ByteSource for LowercaseSource<S> {
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<ReadChunk> {
        let outcome = self.inner.read_chunk(buf)?;
        if let ReadChunk::Data(n) = outcome {
            buf[..n].make_ascii_lowercase();
        }
        Ok(outcome)
    }
}
