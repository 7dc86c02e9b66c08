//! Scope Modules
//!
//! ```text
//! RootContext          RootServicesModule  (47 service contracts)
//! ├── RealAppContext   RealAppModule       (entity data context)
//! └── FakeAppContext   FakeAppModule       (in-memory data context)
//! ```

mod fake;
mod real;
mod root;

pub use fake::FakeAppModule;
pub use real::RealAppModule;
pub use root::RootServicesModule;
