use std::io;

use crate::stream::ByteSink;

/// Broadcasts every write to an ordered list of member sinks.
///
/// Delivery is best-effort: a failing member does not short-circuit the
/// rest, so a dead log file never silences the console next to it.
/// Non-final failures are reported through [`log::warn!`]; the value
/// returned to the caller is the *last* member's result verbatim. Callers
/// needing per-destination failure detail should not rely on this
/// aggregate; fan-out is fire-and-forget broadcast with coarse failure
/// visibility.
pub struct FanoutSink<'a> {
    members: Vec<&'a mut dyn ByteSink>,
}

impl<'a> FanoutSink<'a> {
    /// Wrap an ordered list of member sinks.
    ///
    /// # Panics
    ///
    /// Panics if `members` is empty; a fan-out with nowhere to deliver
    /// would silently discard data.
    pub fn new(members: Vec<&'a mut dyn ByteSink>) -> Self {
        assert!(!members.is_empty(), "FanoutSink requires at least one member");
        Self { members }
    }
}

impl ByteSink for FanoutSink<'_> {
    fn write_chunk(&mut self, buf: &[u8]) -> io::Result<usize> {
        let last = self.members.len() - 1;
        let mut result = Ok(0);
        for (index, member) in self.members.iter_mut().enumerate() {
            result = member.write_chunk(buf);
            if let Err(err) = &result
                && index < last
            {
                log::warn!("fan-out member {index} failed, continuing: {err}");
            }
        }
        result
    }
}
