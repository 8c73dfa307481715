use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for walltag.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (WALLTAG_* prefix)
/// 3. Config file (~/.config/walltag/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the SQLite tag database.
    ///
    /// Can be set via:
    /// - CLI: --db /path/to/db
    /// - ENV: WALLTAG_DATABASE_PATH
    /// - Config: database_path = "/path/to/db"
    /// - Default: ~/.local/share/walltag.db
    #[serde(default = "default_db_path")]
    pub database_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_db_path(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("walltag");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }
}

/// Pick the database path for this run and expand a leading `~`.
///
/// An explicit `--db` wins and skips loading the config file.
pub fn resolve_db_path(cli_db: Option<PathBuf>) -> Result<PathBuf> {
    let path = match cli_db {
        Some(path) => path,
        None => Config::load()?.database_path,
    };
    Ok(expand_tilde(&path))
}

/// Replace a leading `~` component with the user's home directory.
///
/// `~user` forms are left untouched, as is everything when no home
/// directory can be determined.
pub fn expand_tilde(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) if rest.as_os_str().is_empty() => home,
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

/// Returns: ~/.local/share/walltag.db (or platform equivalent)
pub fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("walltag.db")
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/walltag/config.toml
/// - macOS: ~/Library/Application Support/walltag/config.toml
/// - Windows: %APPDATA%\walltag\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("walltag")
        .join("config.toml")
}

pub fn example_config() -> &'static str {
    r#"# Walltag Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (WALLTAG_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Path to the SQLite tag database
#
# A leading ~ is expanded to your home directory.
#
# Can also be set via:
# - CLI: walltag --db ~/wallpapers/tags.db get -f beach.jpg
# - Environment: WALLTAG_DATABASE_PATH=/custom/path.db
#
# Default: ~/.local/share/walltag.db
#database_path = "~/.local/share/walltag.db"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
