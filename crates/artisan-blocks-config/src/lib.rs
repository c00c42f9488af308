use artisan_blocks_engine::{RawMarkupPolicy, RenderOptions};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_CONFIG_DIR: &str = "~/.config/artisan-blocks";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Settings shared by the desktop editor and the terminal viewer.
///
/// ```toml
/// posts_path = "~/artisan/posts"
/// raw_markup = "escape"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding post documents, one JSON file each
    pub posts_path: PathBuf,
    /// How `html` and `embed` blocks are shown
    #[serde(default)]
    pub raw_markup: RawMarkupPolicy,
}

impl Config {
    pub fn new(posts_path: impl Into<PathBuf>) -> Self {
        Self {
            posts_path: posts_path.into(),
            raw_markup: RawMarkupPolicy::default(),
        }
    }

    /// Read settings from `path`. A missing file is not an error.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content, path).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let Config {
            posts_path,
            raw_markup,
        } = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Config {
            posts_path: Self::expand_path(&posts_path).unwrap_or(posts_path),
            raw_markup,
        })
    }

    pub fn save_to_path(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let parent = path.parent().filter(|dir| !dir.as_os_str().is_empty());
        if let Some(dir) = parent {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    /// `~/.config/artisan-blocks/config.toml`, with the home directory
    /// filled in
    pub fn config_path() -> PathBuf {
        Path::new(shellexpand::tilde(APP_CONFIG_DIR).as_ref()).join("config.toml")
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            raw_markup: self.raw_markup,
        }
    }

    /// Expand `~` and `$VAR` references. `None` when a variable is unset.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let raw = path.to_string_lossy();
        let expanded = shellexpand::full(&raw).ok()?;
        Some(PathBuf::from(expanded.into_owned()))
    }
}
