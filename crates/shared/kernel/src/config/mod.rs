use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// A reusable configuration loader that combines file-based settings with
/// environment overrides.
///
/// Layered strategy:
/// 1. **Base File**: settings from a file (e.g. `server.toml`); defaults to
///    `"server"` when no path is given. A missing file is fine; the serde
///    defaults of the target type apply.
/// 2. **Environment Overrides**: values from variables prefixed with
///    `LENDHUB__`, nested structures separated by double underscores
///    (e.g. `LENDHUB__DATABASE__URL` maps to `database.url`).
///
/// # Errors
/// Returns an error if the file content or the environment variables do not
/// match the structure of `T`.
///
/// # Example
/// ```rust
/// use lendhub_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     #[serde(default)]
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("server"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(Environment::with_prefix("LENDHUB").separator("__"));

    info!("Loading config from {}", effective_path.display());

    let config = builder.build()?.try_deserialize::<T>()?;

    Ok(config)
}
