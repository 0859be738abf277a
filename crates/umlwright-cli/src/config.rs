//! Configuration file loading for the CLI
//!
//! A configuration file is looked up in a fixed order, parsed as TOML and
//! then checked for values the pipeline cannot work with. The configured
//! fallback diagram goes through the same validator as extracted diagrams,
//! so a bad fallback is reported at startup instead of in every outcome.

use std::{
    env,
    ffi::OsString,
    fmt, fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use umlwright::{UmlwrightError, ValidationFailure, config::AppConfig};

/// Environment variable that names a configuration file.
pub const CONFIG_ENV_VAR: &str = "UMLWRIGHT_CONFIG";

const LOCAL_CONFIG: &str = "umlwright/config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("extract.fallback_diagram is not a usable diagram: {0}")]
    FallbackDiagram(#[source] ValidationFailure),
}

impl From<ConfigError> for UmlwrightError {
    fn from(err: ConfigError) -> Self {
        UmlwrightError::Config(err.to_string())
    }
}

/// Where the active configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`
    Explicit(PathBuf),
    /// Named by [`CONFIG_ENV_VAR`]
    Environment(PathBuf),
    /// `umlwright/config.toml` under the working directory
    Local(PathBuf),
    /// The platform configuration directory
    System(PathBuf),
    /// No file, built-in defaults
    Default,
}

impl ConfigSource {
    /// The file to load, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(path)
            | ConfigSource::Environment(path)
            | ConfigSource::Local(path)
            | ConfigSource::System(path) => Some(path),
            ConfigSource::Default => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigSource::Explicit(_) => "explicit",
            ConfigSource::Environment(_) => "environment",
            ConfigSource::Local(_) => "local",
            ConfigSource::System(_) => "system",
            ConfigSource::Default => "default",
        };
        f.write_str(name)
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. The file named by `UMLWRIGHT_CONFIG`, when set and non-empty
/// 3. Local project directory (umlwright/config.toml)
/// 4. Platform-specific config directory
/// 5. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - An explicit or environment path is given but the file doesn't exist
/// - Config file exists but cannot be parsed or fails validation
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, UmlwrightError> {
    let explicit: Option<&Path> = explicit_path.as_ref().map(|path| path.as_ref());
    let source = locate(explicit, env::var_os(CONFIG_ENV_VAR));

    let Some(path) = source.path() else {
        debug!("No configuration file found, using default configuration");
        return Ok(AppConfig::default());
    };

    info!(source = source.to_string(), path = path.display().to_string(); "Loading configuration");
    load_config_file(path)
}

/// Decide which configuration file applies, without reading it.
///
/// Explicit and environment paths are returned even when the file is absent,
/// so that a typo is reported instead of silently ignored.
fn locate(explicit: Option<&Path>, from_env: Option<OsString>) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    if let Some(path) = from_env.filter(|value| !value.is_empty()) {
        return ConfigSource::Environment(PathBuf::from(path));
    }

    let local = Path::new(LOCAL_CONFIG);
    if local.exists() {
        return ConfigSource::Local(local.to_path_buf());
    }

    match ProjectDirs::from("com", "umlwright", "umlwright") {
        Some(dirs) => {
            let system = dirs.config_dir().join("config.toml");
            if system.exists() {
                return ConfigSource::System(system);
            }
            debug!(path = system.display().to_string(); "System configuration file not found");
        }
        None => debug!("Could not determine platform-specific config directory"),
    }

    ConfigSource::Default
}

fn load_config_file(path: &Path) -> Result<AppConfig, UmlwrightError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    validate(&config)?;
    Ok(config)
}

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.validation().min_length() == 0 {
        return Err(ConfigError::Validation(
            "validation.min_length must be at least 1".to_string(),
        ));
    }

    let html = config.html();
    if html.height() == 0 {
        return Err(ConfigError::Validation(
            "html.height must be at least 1".to_string(),
        ));
    }
    if html.theme().trim().is_empty() {
        return Err(ConfigError::Validation(
            "html.theme must not be empty".to_string(),
        ));
    }
    if html.script_url().trim().is_empty() {
        return Err(ConfigError::Validation(
            "html.script_url must not be empty".to_string(),
        ));
    }

    // A blank fallback is replaced by the built-in one at extraction time.
    let fallback = config.extract().fallback_diagram();
    if !fallback.trim().is_empty() {
        config
            .validation()
            .validator()
            .check(fallback)
            .map_err(ConfigError::FallbackDiagram)?;
    }

    Ok(())
}
