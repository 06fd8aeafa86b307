// LookAway: native macOS eye-break reminder.
// Uses Cocoa/AppKit via objc2 for a fully native experience.

#[cfg(target_os = "macos")]
mod app;
#[cfg(target_os = "macos")]
mod overlay;
#[cfg(target_os = "macos")]
mod platform;
#[cfg(target_os = "macos")]
mod timers;
#[cfg(target_os = "macos")]
mod tray;
#[cfg(target_os = "macos")]
mod ui;

use std::process::ExitCode;

use lookaway_shared::config::{self, AppConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let loaded = config::load_config();

    let directive = loaded
        .as_ref()
        .map(|cfg| cfg.log_filter.as_str())
        .unwrap_or("info");
    init_logging(directive);

    let cfg = match loaded {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("{e}; using defaults");
            AppConfig::default()
        }
    };
    info!(
        "LookAway v{} starting (break {}s, overlay opacity {:.2})",
        env!("CARGO_PKG_VERSION"),
        cfg.break_seconds,
        cfg.overlay_opacity
    );

    run(cfg)
}

/// RUST_LOG wins over the configured filter.
fn init_logging(directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[cfg(target_os = "macos")]
fn run(cfg: AppConfig) -> ExitCode {
    app::run(cfg);
    ExitCode::SUCCESS
}

#[cfg(not(target_os = "macos"))]
fn run(_cfg: AppConfig) -> ExitCode {
    tracing::error!("LookAway lives in the macOS menu bar; this platform is not supported");
    ExitCode::FAILURE
}
