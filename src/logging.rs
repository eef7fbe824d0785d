// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup with tracing.
//!
//! The filter is read from `ICED_GALLERY_LOG` using the usual `EnvFilter`
//! directive syntax (e.g. `iced_gallery=debug,wgpu=warn`) and defaults to
//! `info`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter directives.
pub const ENV_LOG_FILTER: &str = "ICED_GALLERY_LOG";

const DEFAULT_FILTER: &str = "info";

/// Builds the filter from [`ENV_LOG_FILTER`], falling back to `info` when
/// the variable is unset or malformed.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init() {
    let result = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_target(true))
        .try_init();

    if result.is_ok() {
        tracing::debug!("logging initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
    }

    #[test]
    fn default_filter_is_info() {
        assert_eq!(DEFAULT_FILTER, "info");
        assert!(!env_filter().to_string().is_empty());
    }
}
