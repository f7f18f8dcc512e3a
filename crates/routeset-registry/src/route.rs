//! A single registered route.

use std::fmt;

use crate::handler::Handler;

/// A registered association between an HTTP method, a URI path, a handler,
/// and an optional unique name.
///
/// The method and path are stored exactly as given: no case folding, no
/// trailing-slash handling, no verb validation. Routes are constructed by
/// [`RouteRegistry::add`](crate::RouteRegistry::add) and are immutable once
/// registered.
#[derive(Clone)]
pub struct Route {
    method: String,
    path: String,
    handler: Handler,
    name: Option<String>,
}

impl Route {
    pub(crate) const fn new(
        method: String,
        path: String,
        handler: Handler,
        name: Option<String>,
    ) -> Self {
        Self {
            method,
            path,
            handler,
            name,
        }
    }

    /// Returns the HTTP method as registered.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Returns the literal URI path as registered.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the handler associated with this route.
    pub const fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Returns the route name, if one was given at registration.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("handler", &self.handler)
            .field("name", &self.name)
            .finish()
    }
}
