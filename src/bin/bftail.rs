//! Follow a file and print newly appended lines, `tail -f` style.
//!
//! Polls the file on a fixed interval; a shrink is treated as truncation
//! and the follower restarts from the top of the file. Runs until the
//! process is terminated.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use byteflow::{CancelToken, TailFollower, WriterSink};

/// Follow a file and print each newly appended line.
#[derive(Parser)]
#[command(name = "bftail", version, about, long_about = None)]
struct Cli {
    /// Path to the file that should be watched
    #[arg(short, long)]
    file: PathBuf,

    /// Pause between poll cycles, in milliseconds
    #[arg(long, default_value_t = 500)]
    interval_ms: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut follower = TailFollower::open(&cli.file)?
        .with_interval(Duration::from_millis(cli.interval_ms));
    let mut stdout = WriterSink::new(io::stdout());

    follower.run(&mut stdout, &CancelToken::new())
}
