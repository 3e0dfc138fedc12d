//! Input loader for GitHub Actions environment variables.
//!
//! GitHub Actions exposes every step input as an `INPUT_<NAME>` environment
//! variable. The loader extracts them into [`RawInputs`]; presence and
//! content checks are the validator's job, so a missing optional input and
//! an empty one look the same here.

use anyhow::{Context, Result};
use figment::providers::{Env, Serialized};
use figment::Figment;

use crate::domain::models::RawInputs;

/// Loads raw action inputs from the process environment.
pub struct InputLoader;

impl InputLoader {
    /// Extract all `INPUT_*` variables into a [`RawInputs`].
    ///
    /// Precedence (lowest to highest):
    /// 1. Field defaults (empty strings, `info` log level)
    /// 2. `INPUT_*` environment variables
    pub fn load() -> Result<RawInputs> {
        let raw: RawInputs = Figment::new()
            .merge(Serialized::defaults(RawInputs::default()))
            .merge(Env::prefixed("INPUT_"))
            .extract()
            .context("Failed to read action inputs from the environment")?;

        Ok(raw)
    }
}
