use anyhow::Result;
use byteflow::testing::TempLogFile;
use byteflow::{CancelToken, TailFollower, WriterSink};

#[test]
fn appended_lines_come_out_in_order() -> Result<()> {
    let log = TempLogFile::new()?;
    log.append(b"already here\n")?;

    let mut follower = TailFollower::open(log.path())?;
    let mut sink = WriterSink::new(Vec::new());

    log.append(b"one\ntwo\nthree\n")?;
    let emitted = follower.poll_once(&mut sink)?;

    assert_eq!(emitted, 3);
    assert_eq!(sink.get_ref().as_slice(), b"one\ntwo\nthree\n");
    Ok(())
}

#[test]
fn partial_line_is_withheld_until_terminated() -> Result<()> {
    let log = TempLogFile::new()?;
    let mut follower = TailFollower::open(log.path())?;
    let mut sink = WriterSink::new(Vec::new());

    log.append(b"par")?;
    assert_eq!(follower.poll_once(&mut sink)?, 0);
    assert!(sink.get_ref().is_empty());

    log.append(b"tial\n")?;
    assert_eq!(follower.poll_once(&mut sink)?, 1);
    assert_eq!(sink.get_ref().as_slice(), b"partial\n");
    Ok(())
}

#[test]
fn quiet_cycles_emit_nothing() -> Result<()> {
    let log = TempLogFile::new()?;
    let mut follower = TailFollower::open(log.path())?;
    let mut sink = WriterSink::new(Vec::new());

    assert_eq!(follower.poll_once(&mut sink)?, 0);
    assert_eq!(follower.poll_once(&mut sink)?, 0);
    assert!(sink.get_ref().is_empty());
    Ok(())
}

#[test]
fn truncation_restarts_from_offset_zero() -> Result<()> {
    let log = TempLogFile::new()?;
    log.append(b"old content, never emitted\n")?;

    let mut follower = TailFollower::open(log.path())?;
    let mut sink = WriterSink::new(Vec::new());

    log.truncate()?;
    log.append(b"fresh\n")?;
    let emitted = follower.poll_once(&mut sink)?;

    assert_eq!(emitted, 1);
    assert_eq!(sink.get_ref().as_slice(), b"fresh\n");
    Ok(())
}

#[test]
fn truncation_drops_a_buffered_partial_line() -> Result<()> {
    let log = TempLogFile::new()?;
    let mut follower = TailFollower::open(log.path())?;
    let mut sink = WriterSink::new(Vec::new());

    log.append(b"half a li")?;
    assert_eq!(follower.poll_once(&mut sink)?, 0);

    log.truncate()?;
    log.append(b"new\n")?;
    assert_eq!(follower.poll_once(&mut sink)?, 1);
    assert_eq!(sink.get_ref().as_slice(), b"new\n");
    Ok(())
}

#[test]
fn open_rejects_a_directory() -> Result<()> {
    let dir = tempfile::tempdir()?;
    assert!(TailFollower::open(dir.path()).is_err());
    Ok(())
}

#[test]
fn open_rejects_a_missing_file() {
    assert!(TailFollower::open("definitely/not/a/real/file.log").is_err());
}

#[test]
fn run_returns_cleanly_once_cancelled() -> Result<()> {
    let log = TempLogFile::new()?;
    let mut follower = TailFollower::open(log.path())?;
    let mut sink = WriterSink::new(Vec::new());

    let cancel = CancelToken::new();
    cancel.cancel();
    follower.run(&mut sink, &cancel)?;
    Ok(())
}
