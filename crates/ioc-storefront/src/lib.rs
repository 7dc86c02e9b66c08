//! # Storefront Catalogue
//!
//! Everything the storefront registers with the IoC registry: the service
//! contracts, the data context contract, and the three scope modules that
//! bind them.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`services`] | The 47 per-context service contracts and their default implementations |
//! | [`data`] | The data context contract with its entity-backed and in-memory implementations |
//! | [`modules`] | Scope modules for `RootContext`, `RealAppContext` and `FakeAppContext` |
//! | [`bootstrap`] | [`storefront_bootstrap`] assembling the hierarchy |

pub mod bootstrap;
pub mod data;
pub mod modules;
pub mod services;

pub use bootstrap::storefront_bootstrap;
pub use data::{DATA_CONTEXT, DataContext, EntityDataContext, InMemoryDataContext};
pub use modules::{FakeAppModule, RealAppModule, RootServicesModule};
pub use services::{SERVICE_CONTRACTS, StorefrontService};
