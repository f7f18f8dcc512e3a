//! # routeset
//!
//! A minimal named-route registry: a flat, insertion-ordered collection of
//! (method, path, handler, optional name) tuples with exact-match lookup.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. Depend on `routeset` for the whole surface, or on the individual
//! crates for finer-grained control.
//!
//! There is deliberately no pattern matching, no parameter extraction, and
//! no dispatch loop here: a server registers its routes at startup, then
//! matches each incoming request against the registry and invokes the
//! returned handler itself.
//!
//! # Examples
//!
//! ```
//! use routeset::{Handler, RouteRegistry};
//!
//! let mut routes = RouteRegistry::new();
//! routes.add("GET", "/home", "HomeController::index", Some("Homepage"))?;
//! routes.add("GET", "/greet", Handler::invocable(|| "Hello World!".to_string()), None)?;
//!
//! assert!(routes.has("GET", "/home"));
//!
//! let route = routes.find_by_name("Homepage").unwrap();
//! assert_eq!(route.path(), "/home");
//!
//! let greet = routes.find("GET", "/greet").unwrap();
//! assert_eq!(greet.handler().invoke(), Some("Hello World!".to_string()));
//! # Ok::<(), routeset::RegistryError>(())
//! ```

/// Foundation types: errors, settings, and logging integration.
pub use routeset_core as core;

/// The registry: routes, handlers, and lookup.
pub use routeset_registry as registry;

pub use routeset_core::{RegistryError, RegistryResult, Settings};
pub use routeset_registry::{Handler, InvocableFn, Route, RouteRegistry, SharedRouteRegistry};
