// wallet-core/src/logging.rs
//
// One-time tracing subscriber setup for hosts embedding the wallet core.
// The library only emits events; nothing is printed until a host calls `init_logging`.

use tracing_subscriber::{fmt, EnvFilter};

/// Set to `1` for JSON log lines.
pub const LOG_JSON_ENV: &str = "HYCON_LOG_JSON";

/// Install a stderr subscriber filtered by `RUST_LOG` (default `info`).
///
/// Returns `false` when a global subscriber was already set; calling this
/// more than once is harmless.
pub fn init_logging() -> bool {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let use_json = std::env::var(LOG_JSON_ENV)
        .map(|value| value == "1")
        .unwrap_or(false);

    let builder = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let installed = if use_json {
        builder.json().try_init().is_ok()
    } else {
        builder.compact().try_init().is_ok()
    };

    if installed {
        tracing::debug!(json = use_json, "logging initialized");
    }
    installed
}
