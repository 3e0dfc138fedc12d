//! Step output writer (`GITHUB_OUTPUT`).

use std::fs::OpenOptions;
use std::io::Write;

use tracing::{debug, warn};

/// Append a `name=value` line to the step output file.
///
/// A missing `GITHUB_OUTPUT` variable or a write failure is logged and
/// ignored: outputs are reporting, not part of issue creation.
pub fn set_output(name: &str, value: &str) {
    let Ok(path) = std::env::var("GITHUB_OUTPUT") else {
        warn!("GITHUB_OUTPUT environment variable not found");
        return;
    };

    let result = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .and_then(|mut file| writeln!(file, "{name}={value}"));

    match result {
        Ok(()) => debug!(name, value, "set GitHub output"),
        Err(err) => warn!(name, error = %err, "failed to set GitHub output"),
    }
}
