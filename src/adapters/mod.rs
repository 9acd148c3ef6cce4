//! Transform adapters: wrap a source or sink, apply a byte-level policy,
//! and expose the same capability so wrappers nest arbitrarily.
//!
//! Each adapter owns its inner endpoint and propagates the inner
//! component's errors unchanged. None of them retry on their own
//! initiative; retry policy belongs to the driver (see [`crate::copy`]).

mod case;
mod count;
mod fanout;
mod prefix;

pub use case::{LowercaseSource, UppercaseSource};
pub use count::CountingSink;
pub use fanout::FanoutSink;
pub use prefix::PrefixSink;
