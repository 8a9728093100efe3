mod file_config;

pub use file_config::FileConfig;

use anyhow::{bail, Result};
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub library_root: Option<PathBuf>,
    pub strict_media_check: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding `album/` and `music/`.
    pub library_root: PathBuf,
    /// Fail loads when a track's file is missing instead of reporting it.
    pub strict_media_check: bool,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let library_root = file
            .library_root
            .map(PathBuf::from)
            .or_else(|| cli.library_root.clone())
            .unwrap_or_else(|| PathBuf::from("."));

        // A missing root is fine, the layout gets created on open
        if library_root.exists() && !library_root.is_dir() {
            bail!("library_root is not a directory: {:?}", library_root);
        }

        let strict_media_check = file
            .strict_media_check
            .unwrap_or(cli.strict_media_check)
            || cfg!(feature = "strict_media");

        Ok(Self {
            library_root,
            strict_media_check,
        })
    }
}
