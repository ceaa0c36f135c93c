//! Pacer Implementations
//!
//! | Pacer | Behaviour |
//! |-------|-----------|
//! | [`TokioPacer`] | Sleeps on the tokio timer |
//! | [`NullPacer`] | Returns immediately |

/// Null pacer
pub mod null;
/// Tokio timer pacer
pub mod tokio;

pub use null::NullPacer;
pub use self::tokio::TokioPacer;
