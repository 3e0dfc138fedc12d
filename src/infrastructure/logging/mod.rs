//! Logging setup and secret masking.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber, writing to stderr so stdout stays
/// machine-readable for `--json` runs.
///
/// Filter precedence: `RUST_LOG` when set, otherwise `level`.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Mask sensitive data for logging, leaving the last four characters
/// visible.
pub fn mask_secret(data: &str) -> String {
    const VISIBLE: usize = 4;

    let chars = data.chars().count();
    if chars <= VISIBLE {
        return "*".repeat(8);
    }

    let visible_part: String = data.chars().skip(chars - VISIBLE).collect();
    format!("{}{visible_part}", "*".repeat(chars - VISIBLE))
}
