//! Structured logging setup.
//!
//! `tracing` events are dropped unless a subscriber is installed here. The fmt layer is enabled by
//! `RESEARCH_CONSOLE_TRACING_FMT=1` or `--verbose`; `RUST_LOG` overrides the default filter.

use std::env;

use once_cell::sync::OnceCell;
use tracing_subscriber::prelude::*;

static INIT: OnceCell<()> = OnceCell::new();

fn tracing_fmt_enabled_env() -> bool {
    env::var("RESEARCH_CONSOLE_TRACING_FMT").ok().as_deref() == Some("1")
}

/// Install the global subscriber once. Returns false when logging stays disabled
/// or another subscriber was already installed.
pub fn telemetry_init(verbose: bool) -> bool {
    if INIT.get().is_some() {
        return false;
    }
    if !verbose && !tracing_fmt_enabled_env() {
        return false;
    }

    let default_filter = if verbose { "info" } else { "warn" };
    let filter = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| default_filter.to_string());
    let env_filter = tracing_subscriber::EnvFilter::new(filter);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("research-console: logging init skipped (global subscriber already set)");
        return false;
    }

    let _ = INIT.set(());
    true
}
