//! # byteflow
//!
//! A minimal composable toolkit for moving bytes between abstract sources
//! and sinks. Two capability traits ([`ByteSource`], [`ByteSink`]) anchor
//! everything; adapters wrap an endpoint and expose the same capability,
//! so compositions nest arbitrarily and a single copy engine drives any
//! pair of endpoints.
//!
//! ## Quick Start
//!
//! ```
//! use byteflow::{CountingSink, ReaderSource, UppercaseSource, WriterSink, copy};
//!
//! # fn main() -> std::io::Result<()> {
//! let mut source = UppercaseSource::new(ReaderSource::new(&b"hello, stream"[..]));
//! let mut sink = CountingSink::new(WriterSink::new(Vec::new()));
//!
//! let copied = copy(&mut source, &mut sink)?;
//!
//! assert_eq!(copied, 13);
//! assert_eq!(sink.bytes_written(), 13);
//! assert_eq!(sink.get_ref().get_ref().as_slice(), b"HELLO, STREAM");
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Sources and sinks
//!
//! A [`ByteSource`] produces a bounded chunk of bytes per call and signals
//! end-of-stream as a distinguished [`ReadChunk::End`] outcome, never as
//! a bare zero count, so zero-byte reads stay legal and retryable. A
//! [`ByteSink`] accepts a chunk per call and reports how much it took.
//! [`ReaderSource`] and [`WriterSink`] bridge any [`std::io::Read`] /
//! [`std::io::Write`] value into these contracts.
//!
//! ### Adapters
//!
//! [`UppercaseSource`] and [`LowercaseSource`] map ASCII case in flight;
//! [`CountingSink`] totals accepted bytes; [`PrefixSink`] stamps a prefix
//! at the start of each newline-delimited write; [`FanoutSink`] broadcasts
//! one write to many destinations. Adapters never retry and never swallow
//! inner failures.
//!
//! ### Drivers
//!
//! [`copy`] drains any source into any sink through a fixed buffer,
//! looping on short writes so nothing is silently dropped. [`TailFollower`]
//! is the specialized driver: it polls a file for growth and streams each
//! newly completed line into a sink until a [`CancelToken`] fires.
//!
//! ## Feature Flags
//!
//! - `cli` *(default)* - build the `bftail` binary, a polling `tail -f`
//!
//! ## Module Overview
//!
//! - [`stream`] - capability traits and `std::io` bridges
//! - [`adapters`] - case mapping, counting, prefixing, fan-out
//! - [`copy`] - the copy engine and drain helpers
//! - [`tail`] - the polling tail follower
//! - [`testing`] - deterministic endpoints for contract tests

pub mod adapters;
pub mod copy;
pub mod stream;
pub mod tail;
pub mod testing;

pub use adapters::{CountingSink, FanoutSink, LowercaseSource, PrefixSink, UppercaseSource};
pub use copy::{DEFAULT_BUF_LEN, copy, copy_with_buffer, read_to_vec, write_all_chunks};
pub use stream::{ByteSink, ByteSource, ReadChunk, ReaderSource, WriterSink};
pub use tail::{CancelToken, DEFAULT_POLL_INTERVAL, TailFollower};
