//! A thread-safe wrapper around [`RouteRegistry`].
//!
//! The registry itself assumes a single writer during population. Services
//! that register or look up routes from multiple threads use
//! [`SharedRouteRegistry`], which guards the sequence behind a read-write
//! lock. Lookups return owned [`Route`] clones since a borrow cannot
//! outlive the lock guard.

use std::sync::{Arc, PoisonError, RwLock};

use routeset_core::RegistryResult;

use crate::handler::Handler;
use crate::registry::RouteRegistry;
use crate::route::Route;

/// A cloneable, lock-guarded route registry.
///
/// Cloning the wrapper shares the underlying registry: registrations made
/// through one clone are visible through all others.
///
/// # Examples
///
/// ```
/// use routeset_registry::SharedRouteRegistry;
///
/// let routes = SharedRouteRegistry::new();
/// let writer = routes.clone();
/// writer.add("GET", "/home", "HomeController::index", Some("Homepage"))?;
///
/// assert!(routes.has("GET", "/home"));
/// assert_eq!(routes.find_by_name("Homepage").unwrap().path(), "/home");
/// # Ok::<(), routeset_registry::RegistryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedRouteRegistry {
    inner: Arc<RwLock<RouteRegistry>>,
}

impl SharedRouteRegistry {
    /// Creates an empty shared registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a route. See [`RouteRegistry::add`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateRouteName`](routeset_core::RegistryError::DuplicateRouteName)
    /// if a route with the given non-empty name is already registered.
    pub fn add(
        &self,
        method: impl Into<String>,
        path: impl Into<String>,
        handler: impl Into<Handler>,
        name: Option<&str>,
    ) -> RegistryResult<()> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .add(method, path, handler, name)
    }

    /// Returns a clone of the first route matching the method and path.
    pub fn find(&self, method: &str, path: &str) -> Option<Route> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .find(method, path)
            .cloned()
    }

    /// Returns true if a route matches the given method and path.
    pub fn has(&self, method: &str, path: &str) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .has(method, path)
    }

    /// Returns a clone of the first route registered under the given name.
    pub fn find_by_name(&self, name: &str) -> Option<Route> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .find_by_name(name)
            .cloned()
    }

    /// Returns true if a route is registered under the given name.
    pub fn has_by_name(&self, name: &str) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .has_by_name(name)
    }

    /// Returns the number of registered routes.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}
