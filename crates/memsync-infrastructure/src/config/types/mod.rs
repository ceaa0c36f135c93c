//! Configuration types

pub mod app;
pub mod grouper;
pub mod logging;
pub mod sync;

pub use app::AppConfig;
pub use grouper::GrouperConfig;
pub use logging::LoggingConfig;
pub use sync::SyncConfig;
