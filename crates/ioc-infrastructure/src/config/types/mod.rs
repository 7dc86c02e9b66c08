//! Configuration types module

pub mod app;
pub mod data;
pub mod logging;

// Re-export main types
pub use app::IocConfig;
pub use data::DataConfig;
pub use logging::LoggingConfig;
