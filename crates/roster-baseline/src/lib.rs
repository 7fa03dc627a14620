//! Roster Baseline - Canonical default agent spec values
//!
//! Builds a fully-populated default `AgentSpec` from a `Role`:
//! - Pod-keyed prompt template registry with a generic fallback
//! - Fixed baseline tool list and policy flag set
//!
//! The `Baseline` value is injected configuration, not global state:
//! `Baseline::default()` carries the canonical values, and tests can
//! construct alternates through the `with_*` builders.
//!
//! # Example
//!
//! ```rust
//! use roster_baseline::Baseline;
//! use roster_model::Role;
//!
//! let baseline = Baseline::default();
//! let role = Role::new("Aegis", "IP & Patent Counsel", "IP & Patent Program");
//! let spec = baseline.suggested_spec(&role);
//! assert_eq!(spec.handle, role.handle);
//! assert!(spec.system_prompt.contains("Aegis"));
//! ```

#![warn(unreachable_pub)]

// Core modules
pub mod config;
pub mod templates;

// Re-exports for convenience
pub use config::Baseline;
pub use templates::{canonical_pod, PodTemplates};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
