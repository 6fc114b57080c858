//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.filmstrip/config.toml` unless `--config` points
//! elsewhere. If the home file is missing on first run, a commented-out
//! default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FilmstripConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub viewer: ViewerConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub data_file: Option<String>,
    pub public_dir: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ViewerConfig {
    pub endpoint: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_FILE: &str = "data/templates.json";
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000";

// ============================================================================
// CLI overrides + Resolved Config (concrete values, no Options)
// ============================================================================

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub data_file: Option<PathBuf>,
    pub public_dir: Option<PathBuf>,
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub host: String,
    pub port: u16,
    pub data_file: PathBuf,
    /// Static asset directory. `None` when nothing was configured and the default is absent.
    pub public_dir: Option<PathBuf>,
    pub endpoint: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.filmstrip/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".filmstrip").join("config.toml"))
}

/// Load config from `~/.filmstrip/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FilmstripConfig::default()`.
pub fn load_config() -> Result<FilmstripConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FilmstripConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FilmstripConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<FilmstripConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FilmstripConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Filmstrip Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [server]
# host = "127.0.0.1"                 # Or FILMSTRIP_HOST
# port = 3000                        # Or FILMSTRIP_PORT
# data_file = "data/templates.json"  # Or FILMSTRIP_DATA_FILE
# public_dir = "public"              # Or FILMSTRIP_PUBLIC_DIR; serves /imagesList/...

# [viewer]
# endpoint = "http://127.0.0.1:3000" # Or FILMSTRIP_ENDPOINT
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FilmstripConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with the environment lookup injected.
pub fn resolve_with_env(
    config: &FilmstripConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let host = cli
        .host
        .clone()
        .or_else(|| env("FILMSTRIP_HOST"))
        .or_else(|| config.server.host.clone())
        .unwrap_or_else(|| DEFAULT_HOST.to_string());

    // Port: an unparsable env value is reported and skipped
    let env_port = env("FILMSTRIP_PORT").and_then(|raw| match raw.parse::<u16>() {
        Ok(port) => Some(port),
        Err(e) => {
            warn!("Ignoring FILMSTRIP_PORT={:?}: {}", raw, e);
            None
        }
    });
    let port = cli
        .port
        .or(env_port)
        .or(config.server.port)
        .unwrap_or(DEFAULT_PORT);

    let data_file = cli
        .data_file
        .clone()
        .or_else(|| env("FILMSTRIP_DATA_FILE").map(PathBuf::from))
        .or_else(|| config.server.data_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

    // Public dir: explicit settings are kept as-is; the default only if it exists
    let public_dir = cli
        .public_dir
        .clone()
        .or_else(|| env("FILMSTRIP_PUBLIC_DIR").map(PathBuf::from))
        .or_else(|| config.server.public_dir.as_ref().map(PathBuf::from))
        .or_else(|| {
            let default = PathBuf::from(DEFAULT_PUBLIC_DIR);
            default.is_dir().then_some(default)
        });

    let endpoint = cli
        .endpoint
        .clone()
        .or_else(|| env("FILMSTRIP_ENDPOINT"))
        .or_else(|| config.viewer.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    ResolvedConfig {
        host,
        port,
        data_file,
        public_dir,
        endpoint,
    }
}
