use std::path::Path;

use acad_config::AcademiaConfig;
use anyhow::Context;

use crate::cli::GlobalFlags;

/// Read `.env` (or `--env-file`) into the process environment, then load
/// the layered config.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<AcademiaConfig> {
    match flags.env_file.as_deref() {
        Some(path) => load_env_file(Path::new(path))?,
        None => {
            dotenvy::dotenv().ok();
        }
    }

    let config = AcademiaConfig::load().context("failed to load academia configuration")?;
    tracing::debug!(base_url = config.api.base(), "configuration loaded");
    Ok(config)
}

fn load_env_file(path: &Path) -> anyhow::Result<()> {
    dotenvy::from_path(path)
        .with_context(|| format!("failed to load dotenv file at {}", path.display()))
}
