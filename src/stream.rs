//! Byte-stream capability contracts and bridges to [`std::io`].
//!
//! Everything in this crate is built on two object-safe traits:
//! [`ByteSource`] ("produces bytes on demand") and [`ByteSink`] ("accepts
//! bytes on demand"). Adapters wrap a value of one of these traits and
//! implement the same trait themselves, so wrappers nest arbitrarily and
//! any driver that speaks the contracts works with any composition.
//!
//! Unlike [`std::io::Read`], a source reports end-of-stream as a
//! distinguished [`ReadChunk::End`] outcome rather than a zero byte count.
//! A zero-byte read stays legal and retryable; `End` is terminal.
//!
//! The [`ReaderSource`] and [`WriterSink`] bridges adapt any standard
//! reader or writer into these contracts, so files, standard streams, and
//! in-memory buffers all plug in without bespoke glue.

use std::io::{self, Read, Write};

/// The outcome of a single [`ByteSource::read_chunk`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadChunk {
    /// `n` bytes were produced into the front of the caller's buffer.
    ///
    /// Zero is legal here: it means "nothing produced this call, try
    /// again", not end-of-stream.
    Data(usize),
    /// The stream is exhausted. Every subsequent call must return `End`
    /// again; data never resurrects after this.
    End,
}

impl ReadChunk {
    /// Whether this outcome is the terminal end-of-stream signal.
    #[must_use]
    pub fn is_end(&self) -> bool {
        matches!(self, ReadChunk::End)
    }
}

/// An entity capable of producing a bounded chunk of bytes per call.
///
/// A finite-backed source must eventually return either data or
/// [`ReadChunk::End`]; it must not report `Data(0)` forever.
pub trait ByteSource {
    /// Fill at most `buf.len()` bytes starting at index 0.
    ///
    /// # Errors
    ///
    /// Returns the underlying transport's failure for this call. An error
    /// is not terminal; a later call may succeed.
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<ReadChunk>;
}

/// An entity capable of accepting a chunk of bytes per call.
pub trait ByteSink {
    /// Attempt to accept all of `buf`, returning the count actually
    /// accepted.
    ///
    /// `Ok(n)` with `n < buf.len()` is a short write: the sink took some
    /// bytes and the caller owns the remainder. Drivers that must deliver
    /// everything should use [`write_all_chunks`](crate::copy::write_all_chunks).
    ///
    /// # Errors
    ///
    /// Returns the underlying transport's failure; no bytes from this call
    /// are reported accepted alongside an error.
    fn write_chunk(&mut self, buf: &[u8]) -> io::Result<usize>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<ReadChunk> {
        (**self).read_chunk(buf)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<ReadChunk> {
        (**self).read_chunk(buf)
    }
}

impl<D: ByteSink + ?Sized> ByteSink for &mut D {
    fn write_chunk(&mut self, buf: &[u8]) -> io::Result<usize> {
        (**self).write_chunk(buf)
    }
}

impl<D: ByteSink + ?Sized> ByteSink for Box<D> {
    fn write_chunk(&mut self, buf: &[u8]) -> io::Result<usize> {
        (**self).write_chunk(buf)
    }
}

/// Adapts any [`std::io::Read`] into a [`ByteSource`].
///
/// The standard library signals end-of-stream as `Ok(0)` on a non-empty
/// buffer; this bridge translates that into [`ReadChunk::End`] and latches
/// it, so the source honors the "once exhausted, always exhausted"
/// invariant even over readers that might later yield data again.
pub struct ReaderSource<R> {
    inner: R,
    done: bool,
}

impl<R> ReaderSource<R> {
    /// Wrap a standard reader.
    pub fn new(inner: R) -> Self {
        Self { inner, done: false }
    }

    /// Get a reference to the wrapped reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwrap, discarding the end-of-stream latch.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<ReadChunk> {
        if self.done {
            return Ok(ReadChunk::End);
        }
        // An empty buffer can't distinguish EOF from "no room", so it is
        // always a zero-byte success.
        if buf.is_empty() {
            return Ok(ReadChunk::Data(0));
        }
        let n = self.inner.read(buf)?;
        if n == 0 {
            self.done = true;
            return Ok(ReadChunk::End);
        }
        Ok(ReadChunk::Data(n))
    }
}

/// Adapts any [`std::io::Write`] into a [`ByteSink`].
///
/// `WriterSink<Vec<u8>>` doubles as the in-memory collecting sink: write
/// through the contract, then inspect the buffer via [`get_ref`] or take
/// it back with [`into_inner`].
///
/// [`get_ref`]: WriterSink::get_ref
/// [`into_inner`]: WriterSink::into_inner
pub struct WriterSink<W> {
    inner: W,
}

impl<W> WriterSink<W> {
    /// Wrap a standard writer.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Get a reference to the wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Get a mutable reference to the wrapped writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwrap, handing the writer back (e.g. for flushing).
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ByteSink for WriterSink<W> {
    fn write_chunk(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }
}
