//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();
static INIT_JSON: Once = Once::new();

/// Install the global subscriber.
///
/// Reads `FAID_LOG` for per-target levels, e.g. `FAID_LOG=faid_notes=debug`.
/// Falls back to `faid=info` when unset or invalid. Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("faid=info"));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}

/// Install a JSON subscriber with an explicit filter (for embedding in a
/// report host that collects structured logs).
///
/// Only one global subscriber can exist: returns `false` when another one
/// (from [`init_tracing`] or the host) was already installed.
pub fn init_tracing_with_filter(filter: &str) -> bool {
    let mut installed = false;
    INIT_JSON.call_once(|| {
        installed = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_target(true)
            .json()
            .try_init()
            .is_ok();
    });
    installed
}

