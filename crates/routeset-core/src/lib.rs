//! # routeset-core
//!
//! Foundation types for the routeset workspace: error types, settings, and
//! logging integration. This crate has no dependency on the registry itself.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result alias
//! - [`settings`] - Service settings with TOML loading
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;

// Re-export the most commonly used types at the crate root.
pub use error::{RegistryError, RegistryResult};
pub use settings::Settings;
