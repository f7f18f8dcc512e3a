//! Logging integration for routeset-based services.
//!
//! Provides a helper for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings). The registry crate emits
//! `tracing` events on registration; install a subscriber to see them.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The log level filter is read from `settings.log_level` (e.g. "debug",
/// "info", "warn", "error"). In debug mode a pretty, human-readable format
/// is used; in production a structured JSON format is used.
///
/// Installing a subscriber twice is a no-op.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for a route registration phase.
///
/// Enter this span while populating a registry so the registration events
/// carry the component name.
///
/// # Examples
///
/// ```
/// use routeset_core::logging::registration_span;
///
/// let span = registration_span("api");
/// let _guard = span.enter();
/// tracing::info!("registering routes");
/// ```
pub fn registration_span(component: &str) -> tracing::Span {
    tracing::info_span!("route_registration", component)
}
