use std::path::Path;

use anyhow::Context;
use bilind_config::BilindConfig;

use crate::cli::GlobalFlags;

pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<BilindConfig> {
    load_dotenv()?;

    if let Some(path) = flags.config.as_deref() {
        ensure_config_file(path)?;
    }
    let config =
        BilindConfig::load_from(flags.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

/// Figment ignores missing files; an explicit `--config` must exist.
fn ensure_config_file(path: &Path) -> anyhow::Result<()> {
    if !path.is_file() {
        anyhow::bail!("config file '{}' does not exist", path.display());
    }
    Ok(())
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
