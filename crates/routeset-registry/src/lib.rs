//! # routeset-registry
//!
//! An insertion-ordered registry of named routes with exact-match lookup.
//!
//! A route associates an HTTP method and a literal URI path with a
//! [`Handler`] and an optional unique name. Lookups scan the registry from
//! the front, so the earliest-registered match wins. There is no pattern
//! matching, no parameter extraction, and no dispatch: callers obtain the
//! matched route and decide themselves how to invoke its handler.
//!
//! ## Modules
//!
//! - [`handler`] - The [`Handler`] enum (reference string or invocable)
//! - [`route`] - The [`Route`] record
//! - [`registry`] - The single-threaded [`RouteRegistry`]
//! - [`shared`] - The lock-guarded [`SharedRouteRegistry`]
//!
//! # Examples
//!
//! ```
//! use routeset_registry::RouteRegistry;
//!
//! let mut routes = RouteRegistry::new();
//! routes.add("GET", "/home", "HomeController::index", Some("Homepage"))?;
//!
//! assert!(routes.has("GET", "/home"));
//! let route = routes.find_by_name("Homepage").unwrap();
//! assert_eq!(route.path(), "/home");
//! # Ok::<(), routeset_registry::RegistryError>(())
//! ```

pub mod handler;
pub mod registry;
pub mod route;
pub mod shared;

pub use handler::{Handler, InvocableFn};
pub use registry::RouteRegistry;
pub use route::Route;
pub use shared::SharedRouteRegistry;

// Re-exported so callers matching on `add` failures need only this crate.
pub use routeset_core::{RegistryError, RegistryResult};
