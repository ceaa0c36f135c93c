//! Event Sink Implementations
//!
//! The tracing-backed sink lives in `memsync-infrastructure` next to the
//! logging setup.

/// Null event sink
pub mod null;

pub use null::NullEventSink;
