use crate::catalog::BUILTIN_SOURCE;
use crate::domain::models::ConfigFile;
use std::path::{Path, PathBuf};

/// `$HOME/.config/kitshelf/config.toml`, or `None` without a HOME.
pub fn config_path() -> Option<PathBuf> {
    let home = match std::env::var("HOME") {
        Ok(h) => h,
        Err(_) => return None,
    };
    Some(PathBuf::from(home).join(".config/kitshelf/config.toml"))
}

pub fn load_config() -> anyhow::Result<ConfigFile> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            log::debug!("HOME not set; using default config");
            Ok(ConfigFile::default())
        }
    }
}

pub fn load_config_from(path: &Path) -> anyhow::Result<ConfigFile> {
    if !path.exists() {
        log::debug!("no config at {}; using defaults", path.display());
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    let cfg: ConfigFile = toml::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))?;
    log::debug!("loaded config from {}", path.display());
    Ok(cfg)
}

/// Catalog source in precedence order: flag, config file, built-in.
pub fn catalog_source(flag: Option<&str>, cfg: &ConfigFile) -> String {
    flag.or(cfg.general.catalog.as_deref())
        .unwrap_or(BUILTIN_SOURCE)
        .to_string()
}
