// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup with `tracing`.
//!
//! Events go to stderr. The level defaults to `info` and can be changed with
//! `RUST_LOG` (for example `RUST_LOG=iced_folio=debug`).

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_DIRECTIVE`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the global subscriber.
///
/// Returns `false` when a subscriber was already installed, which makes the
/// call safe to repeat from tests and from the headless CLI mode.
pub fn init() -> bool {
    let installed = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("logging initialized");
    }
    installed
}
