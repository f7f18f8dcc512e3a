//! Error types for the routeset workspace.
//!
//! Registration is the only fallible operation in the registry, so the error
//! surface is small: lookups stay total and signal absence with `Option`,
//! while registration returns a [`RegistryResult`].

use thiserror::Error;

/// The error type for route registration.
///
/// # Examples
///
/// ```
/// use routeset_core::RegistryError;
///
/// let err = RegistryError::DuplicateRouteName("Homepage".to_string());
/// assert_eq!(err.to_string(), "Route with name \"Homepage\" already exists.");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A route with the given name is already registered. Non-empty route
    /// names must be unique across a registry.
    #[error("Route with name \"{0}\" already exists.")]
    DuplicateRouteName(String),
}

impl RegistryError {
    /// Returns the route name that caused the conflict.
    pub fn route_name(&self) -> &str {
        match self {
            Self::DuplicateRouteName(name) => name,
        }
    }
}

/// A convenience type alias for `Result<T, RegistryError>`.
pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_route_name_display() {
        let err = RegistryError::DuplicateRouteName("Homepage".to_string());
        assert_eq!(
            err.to_string(),
            "Route with name \"Homepage\" already exists."
        );
    }

    #[test]
    fn test_route_name_accessor() {
        let err = RegistryError::DuplicateRouteName("user-detail".to_string());
        assert_eq!(err.route_name(), "user-detail");
    }
}
