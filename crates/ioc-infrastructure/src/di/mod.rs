//! Scoped Dependency Registry
//!
//! Maps contracts to construction rules inside named, hierarchical scopes
//! and resolves them into live instances.
//!
//! ## Architecture
//!
//! ```text
//! Resolver (facade)
//!   │  first call ─► RegistryBootstrap::build (exactly once, OnceCell)
//!   ▼
//! ScopeRegistry ── "RootContext" ◄─weak─ "RealAppContext"
//!                               ◄─weak─ "FakeAppContext"
//!   │
//!   ▼
//! Scope ── BindingTable ── Binding { factory, args, lifetime }
//!   │
//!   ▼
//! ExecutionContext ── ExecutionContextStore  (per-context instances)
//! ```
//!
//! ## Key Principles
//!
//! - **Build once, read many**: scopes and bindings are immutable after
//!   bootstrap, so resolution takes no registry lock
//! - **Typed tokens**: `Contract<dyn Trait>` resolves to `Arc<dyn Trait>`
//! - **Explicit composition root**: the [`Resolver`] is constructed and
//!   passed around, there is no hidden global

pub mod binding;
pub mod bootstrap;
pub mod context;
pub mod registry;
pub mod resolver;
pub mod scope;

pub use binding::{Binding, BindingTable};
pub use bootstrap::{HierarchyBootstrap, RegistryBootstrap, ScopeModule};
pub use context::{ExecutionContext, InMemoryContextStore};
pub use registry::ScopeRegistry;
pub use resolver::{Resolver, ResolverBuilder};
pub use scope::{ResolvedBinding, Scope};
