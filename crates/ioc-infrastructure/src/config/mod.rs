//! Configuration
//!
//! [`IocConfig`] carries the one setting the resolver reads at call time
//! (the default scope name), the data connection components consumed by
//! scope modules during bootstrap, and logging settings.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
