use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Install the color-eyre panic and error hooks.
///
/// Call once at the top of main(), before anything can fail. Repeated
/// calls are harmless; later installs are ignored.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

fn default_filter(environment: &Environment) -> EnvFilter {
    if environment.is_production() {
        EnvFilter::new("info,tower_http=info,sea_orm=warn")
    } else {
        EnvFilter::new("debug")
    }
}

/// Set up the global tracing subscriber for the given environment.
///
/// Production gets flattened JSON events suitable for log aggregation;
/// everything else gets the pretty human-readable format. Both include
/// an `ErrorLayer` so color-eyre reports carry span traces.
///
/// `RUST_LOG` overrides the built-in filter when set (for example
/// `RUST_LOG=users_api=trace`). Calling this after a subscriber is
/// already registered is a no-op, which keeps it safe in tests.
pub fn init_tracing(environment: &Environment) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(environment));

    let registry = tracing_subscriber::registry()
        .with(tracing_error::ErrorLayer::default())
        .with(filter);

    let result = if environment.is_production() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .try_init()
    };

    if result.is_ok() {
        info!(environment = ?environment, "tracing initialized");
    } else {
        debug!("tracing subscriber already set, keeping the existing one");
    }
}
