//! CLI command implementations

pub mod export;
pub mod generate;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use cssart_compose::DeterministicRng;

use crate::config::StudioConfig;

/// Load configuration, optionally zeroing the generation delay.
pub(crate) fn load_config(path: Option<&str>, no_delay: bool) -> Result<StudioConfig> {
    let mut config = StudioConfig::load(path.map(Path::new)).with_context(|| match path {
        Some(path) => format!("Failed to load config: {}", path),
        None => "Failed to load config".to_string(),
    })?;
    if no_delay {
        config.generation.delay_ms = 0;
    }
    Ok(config)
}

/// Seeded RNG, or a fresh one from OS entropy. Returns the seed used.
pub(crate) fn seeded_rng(seed: Option<u32>) -> (DeterministicRng, u32) {
    match seed {
        Some(seed) => (DeterministicRng::new(seed), seed),
        None => DeterministicRng::from_entropy(),
    }
}

/// Run a future on a current-thread runtime with the time driver enabled.
pub(crate) fn block_on<F: std::future::Future>(future: F) -> Result<F::Output> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to create runtime")?;
    Ok(rt.block_on(future))
}
