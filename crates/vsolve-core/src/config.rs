use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use vsolve_util::errors::VsolveError;
use vsolve_util::fs::{expand_tilde, home_dir};

/// Global user configuration loaded from `~/.vsolve/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub index: IndexConfig,

    #[serde(default)]
    pub resolve: ResolveConfig,
}

/// Index selection from `[index]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Index files scanned when none are given on the command line.
    #[serde(default)]
    pub default: Vec<String>,
}

/// Resolution behaviour from `[resolve]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolveConfig {
    /// Fail on the first malformed constraint line instead of keeping the
    /// lines parsed before it.
    #[serde(default)]
    pub strict: bool,
    /// Emit every matching index line rather than one per package.
    #[serde(default, rename = "all-matches")]
    pub all_matches: bool,
}

impl GlobalConfig {
    /// Load the configuration from `path`, or from [`GlobalConfig::default_path`]
    /// when `path` is `None`.
    ///
    /// A missing default file yields defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> miette::Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path(), false),
        };
        if !path.is_file() {
            if explicit {
                return Err(VsolveError::Config {
                    message: format!("config file {} does not exist", path.display()),
                }
                .into());
            }
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| VsolveError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            VsolveError::Config {
                message: format!("Failed to parse config: {e}"),
            }
            .into()
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// Configured default index files with `~` expanded.
    pub fn default_indexes(&self) -> Vec<PathBuf> {
        self.index.default.iter().map(|p| expand_tilde(p)).collect()
    }
}

/// Returns the path to the vsolve data directory (`~/.vsolve/`).
pub fn dirs_path() -> PathBuf {
    home_dir().join(".vsolve")
}
