use serde::Deserialize;
use tracing::Level;

/// Env var naming the TOML file; `./config.toml` when unset.
pub const CONFIG_PATH_VAR: &str = "MOVIE_CATALOG_CONFIG_PATH";
pub const ENV_PREFIX: &str = "MOVIE_CATALOG";

impl Config {
    pub fn init() -> Result<Self, config::ConfigError> {
        let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| String::from("./config.toml"));
        Self::load(&path)
    }

    /// Optional TOML file at `path`, then `MOVIE_CATALOG__SECTION__KEY` overrides.
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()
    }
}

// ================================================================================================
// Models
// ================================================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

// ===============================================================================
// Logs
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self { level: default_level() }
    }
}

impl LogsConfig {
    /// Unknown level names fall back to INFO.
    pub fn max_level(&self) -> Level {
        self.level.parse().unwrap_or(Level::INFO)
    }
}

fn default_level() -> String { "info".to_string() }

// ===============================================================================
// Storage
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Catalog file, rewritten in full after every change.
    #[serde(default = "default_storage_path")]
    pub path: String,
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
    #[serde(default)]
    pub write_mode: WriteMode,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            duplicate_policy: DuplicatePolicy::default(),
            write_mode: WriteMode::default(),
        }
    }
}

fn default_storage_path() -> String { "movies.txt".to_string() }

/// What `create` does with an id that is already in the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Append anyway; both entries coexist until an update or delete.
    #[default]
    Allow,
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    #[default]
    Truncate,
    /// Temp file + rename.
    Atomic,
}
