//! The copy engine: universal glue between any source and any sink.
//!
//! [`copy`] drains a [`ByteSource`] into a [`ByteSink`] through a fixed
//! intermediate buffer. It is domain-agnostic: memory, files, standard
//! streams, and arbitrarily nested adapters all move through the same
//! loop.
//!
//! Short writes are handled here, not in the adapters: when a sink
//! accepts fewer bytes than offered without failing, the engine loops on
//! the remainder until everything lands. A sink that accepts *nothing*
//! while bytes remain raises [`ErrorKind::WriteZero`] instead of spinning.

use std::io::{self, ErrorKind};

use crate::stream::{ByteSink, ByteSource, ReadChunk};

/// Default intermediate buffer size for [`copy`].
pub const DEFAULT_BUF_LEN: usize = 64 * 1024;

/// Drain `source` into `sink` through a [`DEFAULT_BUF_LEN`] buffer.
///
/// Returns the total number of bytes successfully written to the sink.
///
/// # Errors
///
/// Surfaces the first read or write failure. Reads interrupted by a
/// signal ([`ErrorKind::Interrupted`]) are retried here; retry policy
/// belongs to the driver, never to adapters.
pub fn copy<S, D>(source: &mut S, sink: &mut D) -> io::Result<u64>
where
    S: ByteSource + ?Sized,
    D: ByteSink + ?Sized,
{
    let mut buf = vec![0u8; DEFAULT_BUF_LEN];
    copy_with_buffer(source, sink, &mut buf)
}

/// [`copy`] with a caller-supplied intermediate buffer.
///
/// Behavior is identical for any buffer size down to a single byte; tests
/// run the engine over a 64-byte buffer as a conservative unit.
///
/// # Errors
///
/// See [`copy`].
///
/// # Panics
///
/// Panics if `buf` is empty.
pub fn copy_with_buffer<S, D>(source: &mut S, sink: &mut D, buf: &mut [u8]) -> io::Result<u64>
where
    S: ByteSource + ?Sized,
    D: ByteSink + ?Sized,
{
    assert!(!buf.is_empty(), "copy requires a non-empty buffer");
    let mut written = 0u64;
    loop {
        let filled = match source.read_chunk(buf) {
            Ok(ReadChunk::End) => return Ok(written),
            Ok(ReadChunk::Data(n)) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        if filled == 0 {
            // Zero-byte reads are legal and retryable.
            continue;
        }
        write_all_chunks(sink, &buf[..filled])?;
        written += filled as u64;
    }
}

/// Deliver all of `buf` to `sink`, looping on short writes.
///
/// This is the engine's under-write policy, shared with the tail follower
/// so every driver in the crate delivers whole chunks.
///
/// # Errors
///
/// Propagates the sink's failure, or raises [`ErrorKind::WriteZero`] if
/// the sink accepts zero bytes while data remains.
pub fn write_all_chunks<D: ByteSink + ?Sized>(sink: &mut D, mut buf: &[u8]) -> io::Result<()> {
    while !buf.is_empty() {
        let accepted = sink.write_chunk(buf)?;
        if accepted == 0 {
            return Err(io::Error::new(
                ErrorKind::WriteZero,
                "sink accepted no bytes with data remaining",
            ));
        }
        buf = &buf[accepted..];
    }
    Ok(())
}

/// Drain `source` to completion into a vector.
///
/// # Errors
///
/// Surfaces the first read failure; [`ErrorKind::Interrupted`] reads are
/// retried as in [`copy`].
pub fn read_to_vec<S: ByteSource + ?Sized>(source: &mut S) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut buf = vec![0u8; 8 * 1024];
    loop {
        match source.read_chunk(&mut buf) {
            Ok(ReadChunk::End) => return Ok(out),
            Ok(ReadChunk::Data(n)) => out.extend_from_slice(&buf[..n]),
            Err(err) if err.kind() == ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
}
