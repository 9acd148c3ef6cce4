use byteflow::testing::{FailingSink, ShortWriteSink};
use byteflow::{
    ByteSink, CountingSink, FanoutSink, LowercaseSource, PrefixSink, ReaderSource,
    UppercaseSource, WriterSink, read_to_vec,
};

#[test]
fn uppercase_maps_ascii_and_preserves_the_rest() {
    // "é" is 0xC3 0xA9 in UTF-8; neither byte is ASCII lowercase.
    let input: &[u8] = b"caf\xC3\xA9 42, mixed CASE!";
    let mut source = UppercaseSource::new(ReaderSource::new(input));
    let out = read_to_vec(&mut source).unwrap();
    assert_eq!(out.as_slice(), b"CAF\xC3\xA9 42, MIXED CASE!");
}

#[test]
fn lowercase_is_the_mirror_mapping() {
    let mut source = LowercaseSource::new(ReaderSource::new(&b"Hello WORLD"[..]));
    let out = read_to_vec(&mut source).unwrap();
    assert_eq!(out.as_slice(), b"hello world");
}

#[test]
fn counting_tracks_accepted_not_requested() {
    let mut sink = CountingSink::new(ShortWriteSink::new(3));
    assert_eq!(sink.write_chunk(b"hello").unwrap(), 3);
    assert_eq!(sink.bytes_written(), 3);
    assert_eq!(sink.write_chunk(b"lo").unwrap(), 2);
    assert_eq!(sink.bytes_written(), 5);
    assert_eq!(sink.get_ref().accepted(), b"helllo");
}

#[test]
fn counting_propagates_failure_untouched() {
    let mut sink = CountingSink::new(FailingSink::new(0));
    assert!(sink.write_chunk(b"x").is_err());
    assert_eq!(sink.bytes_written(), 0);
}

#[test]
fn prefix_once_per_newline_terminated_write() {
    let mut sink = PrefixSink::new(WriterSink::new(Vec::new()), ">");
    assert_eq!(sink.write_chunk(b"a\n").unwrap(), 2);
    assert_eq!(sink.write_chunk(b"b\n").unwrap(), 2);
    assert_eq!(sink.write_chunk(b"c").unwrap(), 1);
    assert_eq!(sink.get_ref().get_ref().as_slice(), b">a\n>b\n>c");
}

#[test]
fn prefix_spanning_write_gets_one_prefix() {
    let mut sink = PrefixSink::new(WriterSink::new(Vec::new()), "> ");
    sink.write_chunk(b"one\ntwo\n").unwrap();
    assert_eq!(sink.get_ref().get_ref().as_slice(), b"> one\ntwo\n");
}

#[test]
fn prefix_failure_aborts_before_payload() {
    let mut sink = PrefixSink::new(FailingSink::new(0), ">");
    assert!(sink.write_chunk(b"payload").is_err());
    assert!(sink.get_ref().accepted().is_empty());
}

#[test]
fn fanout_broadcasts_to_every_member() {
    let mut a = WriterSink::new(Vec::new());
    let mut b = WriterSink::new(Vec::new());
    {
        let mut fanout =
            FanoutSink::new(vec![&mut a as &mut dyn ByteSink, &mut b as &mut dyn ByteSink]);
        assert_eq!(fanout.write_chunk(b"x").unwrap(), 1);
    }
    assert_eq!(a.get_ref().as_slice(), b"x");
    assert_eq!(b.get_ref().as_slice(), b"x");
}

#[test]
fn fanout_keeps_delivering_past_a_failed_member() {
    let mut broken = FailingSink::new(0);
    let mut healthy = WriterSink::new(Vec::new());
    {
        let mut fanout = FanoutSink::new(vec![
            &mut broken as &mut dyn ByteSink,
            &mut healthy as &mut dyn ByteSink,
        ]);
        // Last member succeeded, so the aggregate result is its result.
        assert_eq!(fanout.write_chunk(b"x").unwrap(), 1);
    }
    assert_eq!(healthy.get_ref().as_slice(), b"x");
}

#[test]
fn fanout_reports_last_member_failure() {
    let mut healthy = WriterSink::new(Vec::new());
    let mut broken = FailingSink::new(0);
    {
        let mut fanout = FanoutSink::new(vec![
            &mut healthy as &mut dyn ByteSink,
            &mut broken as &mut dyn ByteSink,
        ]);
        assert!(fanout.write_chunk(b"x").is_err());
    }
    assert_eq!(healthy.get_ref().as_slice(), b"x");
}
