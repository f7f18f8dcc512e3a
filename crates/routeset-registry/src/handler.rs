//! Route handler representation.
//!
//! A handler is either an opaque reference string that the caller resolves
//! itself (e.g. `"HomeController::index"`) or a zero-argument callable whose
//! return value the caller uses as-is. The registry stores and returns
//! handlers without inspecting them.

use std::fmt;
use std::sync::Arc;

/// The type for invocable route handlers.
///
/// A zero-argument callable producing a `String`. It is wrapped in an `Arc`
/// so it can be shared across threads and cloned cheaply alongside its
/// [`Route`](crate::Route).
pub type InvocableFn = Arc<dyn Fn() -> String + Send + Sync>;

/// The action associated with a route.
///
/// Callers pattern-match on the two cases rather than probing the value:
///
/// ```
/// use routeset_registry::Handler;
///
/// let by_ref = Handler::from("HomeController::index");
/// assert_eq!(by_ref.as_reference(), Some("HomeController::index"));
///
/// let direct = Handler::invocable(|| "Hello World!".to_string());
/// assert_eq!(direct.invoke(), Some("Hello World!".to_string()));
/// ```
#[derive(Clone)]
pub enum Handler {
    /// An opaque reference the caller must resolve and dispatch itself.
    Reference(String),
    /// A directly invocable unit whose return value the caller uses as-is.
    Invocable(InvocableFn),
}

impl Handler {
    /// Wraps a closure as an invocable handler.
    pub fn invocable<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self::Invocable(Arc::new(f))
    }

    /// Returns the reference string, if this is a [`Handler::Reference`].
    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Self::Reference(r) => Some(r),
            Self::Invocable(_) => None,
        }
    }

    /// Calls the handler and returns its output, if this is a
    /// [`Handler::Invocable`].
    pub fn invoke(&self) -> Option<String> {
        match self {
            Self::Reference(_) => None,
            Self::Invocable(f) => Some(f()),
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference(r) => f.debug_tuple("Reference").field(r).finish(),
            Self::Invocable(_) => f.write_str("Invocable(..)"),
        }
    }
}

impl From<&str> for Handler {
    fn from(reference: &str) -> Self {
        Self::Reference(reference.to_string())
    }
}

impl From<String> for Handler {
    fn from(reference: String) -> Self {
        Self::Reference(reference)
    }
}
