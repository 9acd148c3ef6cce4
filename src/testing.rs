//! Deterministic endpoints for exercising stream contracts without real
//! transports, plus a disposable on-disk log for tail-follower tests.
//!
//! These are shipped in the crate proper (not behind `cfg(test)`) so
//! downstream users can exercise their own adapters against the same
//! contract corners: zero-byte reads, sticky end-of-stream, mid-stream
//! failure, and chronic under-writes.

use std::collections::VecDeque;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::stream::{ByteSink, ByteSource, ReadChunk};

/// Yields a scripted sequence of chunks, then end-of-stream.
///
/// Chunks are replayed in order; an empty chunk yields a legal zero-byte
/// read. A chunk larger than the caller's buffer is served across
/// multiple calls. After the script runs dry, every call returns
/// [`ReadChunk::End`].
pub struct ScriptedSource {
    chunks: VecDeque<Vec<u8>>,
}

impl ScriptedSource {
    /// Build a source that replays `chunks` in order.
    pub fn new<I, C>(chunks: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Vec<u8>>,
    {
        Self {
            chunks: chunks.into_iter().map(Into::into).collect(),
        }
    }
}

impl ByteSource for ScriptedSource {
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<ReadChunk> {
        let Some(chunk) = self.chunks.front_mut() else {
            return Ok(ReadChunk::End);
        };
        let n = chunk.len().min(buf.len());
        buf[..n].copy_from_slice(&chunk[..n]);
        chunk.drain(..n);
        if chunk.is_empty() {
            self.chunks.pop_front();
        }
        Ok(ReadChunk::Data(n))
    }
}

/// Accepts writes until a byte budget is exhausted, then fails every call.
///
/// A write that would overrun the remaining budget fails whole; the sink
/// never partially accepts a failing chunk. `FailingSink::new(0)` fails
/// from the first write.
pub struct FailingSink {
    accepted: Vec<u8>,
    budget: usize,
}

impl FailingSink {
    /// A sink that accepts at most `budget` bytes before failing.
    pub fn new(budget: usize) -> Self {
        Self {
            accepted: Vec::new(),
            budget,
        }
    }

    /// Every byte accepted before the budget ran out.
    pub fn accepted(&self) -> &[u8] {
        &self.accepted
    }
}

impl ByteSink for FailingSink {
    fn write_chunk(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.len() > self.budget {
            return Err(io::Error::other("sink failed"));
        }
        self.budget -= buf.len();
        self.accepted.extend_from_slice(buf);
        Ok(buf.len())
    }
}

/// Never fails, but accepts at most `limit` bytes per call.
///
/// Exercises the short-write path in drivers. A limit of zero makes every
/// write a zero-progress write, which [`write_all_chunks`] must reject.
///
/// [`write_all_chunks`]: crate::copy::write_all_chunks
pub struct ShortWriteSink {
    accepted: Vec<u8>,
    limit: usize,
}

impl ShortWriteSink {
    /// A sink that accepts at most `limit` bytes per call.
    pub fn new(limit: usize) -> Self {
        Self {
            accepted: Vec::new(),
            limit,
        }
    }

    /// Every byte accepted so far, in order.
    pub fn accepted(&self) -> &[u8] {
        &self.accepted
    }
}

impl ByteSink for ShortWriteSink {
    fn write_chunk(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = buf.len().min(self.limit);
        self.accepted.extend_from_slice(&buf[..n]);
        Ok(n)
    }
}

/// A disposable on-disk log file for exercising the tail follower.
///
/// The file is deleted when this value drops. `append` and `truncate`
/// operate through fresh handles, mimicking an external writer touching
/// the file while a follower watches it.
pub struct TempLogFile {
    file: NamedTempFile,
}

impl TempLogFile {
    /// Create an empty temporary log file.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be created.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            file: NamedTempFile::new()?,
        })
    }

    /// Path to the log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Append bytes the way an external writer would.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or written.
    pub fn append(&self, data: &[u8]) -> io::Result<()> {
        let mut f = OpenOptions::new().append(true).open(self.path())?;
        f.write_all(data)
    }

    /// Truncate the file to zero length, as a rotation would.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or truncated.
    pub fn truncate(&self) -> io::Result<()> {
        let f = OpenOptions::new().write(true).open(self.path())?;
        f.set_len(0)
    }
}

impl Default for TempLogFile {
    fn default() -> Self {
        Self::new().expect("Failed to create temporary log file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_source_splits_large_chunks() {
        let mut source = ScriptedSource::new([b"abcd".to_vec()]);
        let mut buf = [0u8; 3];
        assert_eq!(source.read_chunk(&mut buf).unwrap(), ReadChunk::Data(3));
        assert_eq!(&buf, b"abc");
        assert_eq!(source.read_chunk(&mut buf).unwrap(), ReadChunk::Data(1));
        assert_eq!(buf[0], b'd');
        assert_eq!(source.read_chunk(&mut buf).unwrap(), ReadChunk::End);
    }

    #[test]
    fn failing_sink_rejects_overrun_whole() {
        let mut sink = FailingSink::new(3);
        assert_eq!(sink.write_chunk(b"ab").unwrap(), 2);
        assert!(sink.write_chunk(b"cd").is_err());
        assert_eq!(sink.accepted(), b"ab");
    }
}
