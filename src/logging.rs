//! Diagnostic logging.
//!
//! The library only emits `tracing` events. Binaries that want to see them
//! call [`init`] once at startup. Logs go to stderr so they stay off the line
//! the bar redraws on stdout.
//!
//! `RUST_LOG` takes precedence over the level passed in:
//! ```bash
//! RUST_LOG=terminal_progress=debug terminal-progress --steps 20
//! ```

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

/// Install a stderr subscriber filtered at `default_level` (e.g. `"warn"`).
///
/// Safe to call more than once; only the first call takes effect.
pub fn init(default_level: &str) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(default_level)
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_filter(filter);

        // Another subscriber may already be installed by the host program.
        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });
}
