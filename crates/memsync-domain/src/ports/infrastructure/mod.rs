//! Infrastructure Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`Pacer`] | Throttles the request rate between batches |
//! | [`SyncEventSink`] | Receives structured synchronization events |

/// Event sink port
pub mod events;
/// Pacing port
pub mod pacing;

pub use events::{SharedEventSink, SyncEventSink};
pub use pacing::{Pacer, SharedPacer};
