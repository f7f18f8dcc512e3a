//! The route registry: an insertion-ordered collection with exact-match
//! lookup by method+path or by name.

use routeset_core::{RegistryError, RegistryResult};

use crate::handler::Handler;
use crate::route::Route;

/// An insertion-ordered collection of registered routes.
///
/// Routes are appended by [`add`](Self::add) and never removed or mutated.
/// All lookups scan from the front, so when two routes share a
/// (method, path) pair the earliest-registered one wins. Non-empty route
/// names are unique across the registry; this is the only invariant
/// enforced.
///
/// The registry assumes a single writer (typically route setup at service
/// startup). For concurrent access use
/// [`SharedRouteRegistry`](crate::SharedRouteRegistry).
///
/// # Examples
///
/// ```
/// use routeset_registry::{Handler, RouteRegistry};
///
/// let mut routes = RouteRegistry::new();
/// routes.add("GET", "/home", "HomeController::index", Some("Homepage"))?;
/// routes.add("GET", "/greet", Handler::invocable(|| "Hello World!".to_string()), None)?;
///
/// assert!(routes.has("GET", "/home"));
/// let greet = routes.find("GET", "/greet").unwrap();
/// assert_eq!(greet.handler().invoke(), Some("Hello World!".to_string()));
/// # Ok::<(), routeset_registry::RegistryError>(())
/// ```
#[derive(Debug, Default)]
pub struct RouteRegistry {
    routes: Vec<Route>,
}

impl RouteRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a route.
    ///
    /// `method` and `path` are stored as given, with no normalization or
    /// validation. Duplicate (method, path) pairs are permitted; lookups
    /// return the first one registered. `Some("")` is treated as unnamed.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateRouteName`] if a route with the
    /// given non-empty name is already registered. The registry is left
    /// unmodified.
    pub fn add(
        &mut self,
        method: impl Into<String>,
        path: impl Into<String>,
        handler: impl Into<Handler>,
        name: Option<&str>,
    ) -> RegistryResult<()> {
        let name = name.filter(|n| !n.is_empty());
        if let Some(n) = name {
            if self.has_by_name(n) {
                tracing::warn!(name = n, "rejected route with duplicate name");
                return Err(RegistryError::DuplicateRouteName(n.to_string()));
            }
        }

        let route = Route::new(
            method.into(),
            path.into(),
            handler.into(),
            name.map(String::from),
        );
        tracing::debug!(
            method = route.method(),
            path = route.path(),
            name = route.name(),
            "registered route"
        );
        self.routes.push(route);
        Ok(())
    }

    /// Returns the first route whose method and path both compare exactly
    /// equal to the inputs, or `None` if no route matches.
    pub fn find(&self, method: &str, path: &str) -> Option<&Route> {
        self.routes
            .iter()
            .find(|r| r.method() == method && r.path() == path)
    }

    /// Returns true if a route matches the given method and path.
    pub fn has(&self, method: &str, path: &str) -> bool {
        self.find(method, path).is_some()
    }

    /// Returns the first route registered under the given name, or `None`.
    ///
    /// The empty string never matches: unnamed routes are not reachable by
    /// name lookup.
    pub fn find_by_name(&self, name: &str) -> Option<&Route> {
        if name.is_empty() {
            return None;
        }
        self.routes.iter().find(|r| r.name() == Some(name))
    }

    /// Returns true if a route is registered under the given name.
    pub fn has_by_name(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Returns the number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Returns the registered routes in insertion order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns an iterator over the routes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }
}

impl<'a> IntoIterator for &'a RouteRegistry {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
