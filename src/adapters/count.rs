use std::io;

use crate::stream::ByteSink;

/// Counts bytes as they pass through to the inner sink.
///
/// The running total reflects only bytes the inner sink actually accepted,
/// never the bytes requested: an inner sink that under-accepts advances
/// the total by its own count. The total is readable at any time and is
/// never reset.
pub struct CountingSink<D> {
    inner: D,
    total: u64,
}

impl<D> CountingSink<D> {
    /// Wrap a sink with a zeroed counter.
    pub fn new(inner: D) -> Self {
        Self { inner, total: 0 }
    }

    /// Total bytes the inner sink has accepted so far.
    #[must_use]
    pub fn bytes_written(&self) -> u64 {
        self.total
    }

    /// Get a reference to the inner sink.
    pub fn get_ref(&self) -> &D {
        &self.inner
    }

    /// Get a mutable reference to the inner sink.
    pub fn get_mut(&mut self) -> &mut D {
        &mut self.inner
    }

    /// Unwrap the inner sink, discarding the counter.
    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D: ByteSink> ByteSink for CountingSink<D> {
    fn write_chunk(&mut self, buf: &[u8]) -> io::Result<usize> {
        let accepted = self.inner.write_chunk(buf)?;
        self.total += accepted as u64;
        Ok(accepted)
    }
}
