use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Base download directory used when a caller gives a relative (or no)
/// destination.
pub const DEFAULT_DOWNLOAD_DIR: &str = "downloads";

/// Global configuration loaded from `~/.config/mdm/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadConfig {
    /// Base directory relative destinations resolve against.
    pub download_dir: PathBuf,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from(DEFAULT_DOWNLOAD_DIR),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mdm")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DownloadConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DownloadConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DownloadConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_download_dir() {
        let cfg = DownloadConfig::default();
        assert_eq!(cfg.download_dir, PathBuf::from("downloads"));
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = DownloadConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: DownloadConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.download_dir, cfg.download_dir);
    }

    #[test]
    fn config_toml_custom_dir() {
        let cfg: DownloadConfig = toml::from_str(r#"download_dir = "/srv/media""#).unwrap();
        assert_eq!(cfg.download_dir, PathBuf::from("/srv/media"));
    }
}
