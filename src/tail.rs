//! A polling tail follower: watch a file for growth and stream newly
//! appended lines into any [`ByteSink`].
//!
//! Polling was chosen over OS-level change notification for portability;
//! it trades latency (bounded by the poll interval) for simplicity. Each
//! cycle re-stats the file, treats a shrink as truncation (file replaced
//! or rotated, so the follower restarts from offset zero), reads whatever
//! appeared since the last position, and emits every complete
//! newline-terminated line. A partial trailing line stays buffered until
//! a later cycle completes it.
//!
//! The follower is single-threaded and synchronous; the sleep between
//! cycles is its only yielding point. Cancellation is cooperative via a
//! [`CancelToken`] checked at the top of each cycle.
//!
//! ```no_run
//! use byteflow::{CancelToken, TailFollower, WriterSink};
//! # fn main() -> anyhow::Result<()> {
//! let mut follower = TailFollower::open("app.log")?;
//! let mut stdout = WriterSink::new(std::io::stdout());
//! follower.run(&mut stdout, &CancelToken::new())?;
//! # Ok(())
//! # }
//! ```

use std::fs::{self, File};
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};

use crate::copy::write_all_chunks;
use crate::stream::ByteSink;

/// Default pause between poll cycles.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// A cloneable cancellation flag for [`TailFollower::run`].
///
/// Clones share one flag: hand a clone to the thread driving the follower
/// and call [`cancel`](CancelToken::cancel) from anywhere else.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// A fresh, un-cancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; takes effect at the top of the next cycle.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Follows a file, emitting newly appended lines to a sink.
pub struct TailFollower {
    path: PathBuf,
    file: File,
    last_size: u64,
    offset: u64,
    pending: Vec<u8>,
    interval: Duration,
}

impl TailFollower {
    /// Open `path` for following, positioned at the current end of file.
    ///
    /// Lines already present are never emitted; only growth observed after
    /// this call is.
    ///
    /// # Errors
    ///
    /// Fails fatally if the path cannot be resolved or statted, names a
    /// directory, or cannot be opened for reading. Setup failures are not
    /// retried.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = std::path::absolute(path.as_ref())
            .with_context(|| format!("resolve {}", path.as_ref().display()))?;
        let meta =
            fs::metadata(&path).with_context(|| format!("stat {}", path.display()))?;
        if meta.is_dir() {
            bail!("{} is a directory", path.display());
        }
        let file =
            File::open(&path).with_context(|| format!("open {}", path.display()))?;
        let size = meta.len();
        Ok(Self {
            path,
            file,
            last_size: size,
            offset: size,
            pending: Vec::new(),
            interval: DEFAULT_POLL_INTERVAL,
        })
    }

    /// Replace the default 500 ms pause between poll cycles.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// The absolute path being followed.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run one watch cycle: detect truncation, read what the file gained,
    /// and emit every complete line (trailing newline included) to `sink`.
    ///
    /// Returns the number of lines emitted this cycle.
    ///
    /// # Errors
    ///
    /// Surfaces stat, seek, read, and sink failures with context.
    pub fn poll_once<D: ByteSink + ?Sized>(&mut self, sink: &mut D) -> Result<usize> {
        let meta = fs::metadata(&self.path)
            .with_context(|| format!("stat {}", self.path.display()))?;
        let size = meta.len();
        if size < self.last_size {
            log::info!(
                "{} shrank from {} to {size} bytes, restarting from the top",
                self.path.display(),
                self.last_size
            );
            // Full reset: a buffered partial line belonged to the replaced
            // content and must not leak into the new file's first line.
            self.offset = 0;
            self.pending.clear();
        }

        self.file
            .seek(SeekFrom::Start(self.offset))
            .with_context(|| format!("seek {}", self.path.display()))?;
        let start_len = self.pending.len();
        let read = self
            .file
            .read_to_end(&mut self.pending)
            .with_context(|| format!("read {}", self.path.display()))?;
        debug_assert_eq!(self.pending.len(), start_len + read);
        self.offset += read as u64;
        self.last_size = size;

        let mut emitted = 0usize;
        let mut consumed = 0usize;
        while let Some(pos) = self.pending[consumed..].iter().position(|&b| b == b'\n') {
            let end = consumed + pos + 1;
            write_all_chunks(sink, &self.pending[consumed..end])
                .context("emit line to sink")?;
            consumed = end;
            emitted += 1;
        }
        self.pending.drain(..consumed);
        Ok(emitted)
    }

    /// Poll until `cancel` fires, sleeping the configured interval between
    /// cycles.
    ///
    /// # Errors
    ///
    /// Stops at the first cycle failure and surfaces it; a clean
    /// cancellation returns `Ok(())`.
    pub fn run<D: ByteSink + ?Sized>(&mut self, sink: &mut D, cancel: &CancelToken) -> Result<()> {
        while !cancel.is_cancelled() {
            self.poll_once(sink)?;
            thread::sleep(self.interval);
        }
        Ok(())
    }
}
