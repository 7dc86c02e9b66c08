//! Domain layer constants
//!
//! Names that are part of the registry's public contract. Infrastructure
//! defaults (file names, env prefixes) live in `ioc_infrastructure::constants`.

// ============================================================================
// SCOPE NAMES
// ============================================================================

/// Name of the root scope; it has no parent
pub const ROOT_SCOPE: &str = "RootContext";

/// Production scope, child of [`ROOT_SCOPE`]
pub const REAL_SCOPE: &str = "RealAppContext";

/// Scope reserved for test doubles, child of [`ROOT_SCOPE`]
pub const FAKE_SCOPE: &str = "FakeAppContext";

// ============================================================================
// CONFIGURATION KEYS
// ============================================================================

/// Configuration key holding the scope used by unscoped calls
pub const DEFAULT_SCOPE_KEY: &str = "default_scope";

// ============================================================================
// CONNECTION DESCRIPTOR
// ============================================================================

/// Default ADO-style provider invariant name for the entity data context
pub const DEFAULT_DATA_PROVIDER: &str = "System.Data.SqlClient";

/// Fixed metadata locator for the storefront entity model
pub const DEFAULT_DATA_METADATA: &str = "res://*/Data.StorefrontModel.csdl|res://*/Data.StorefrontModel.ssdl|res://*/Data.StorefrontModel.msl";
