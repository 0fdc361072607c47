use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

pub mod animation;
pub mod app;
pub mod cli;
pub mod contact;
pub mod keys;
pub mod limits;
pub mod navigation;
pub mod validation;

pub use animation::AnimationConfig;
pub use app::AppConfig;
pub use cli::CliArgs;
pub use contact::ContactConfig;
pub use keys::KeyBindingsConfig;
pub use navigation::{NavigationConfig, TieBreak};
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Defaults compiled into the binary; every user source is layered on top.
pub const DEFAULT_CONFIG: &str = include_str!("../../config.default.toml");

/// Optional file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Environment prefix, e.g. `FOLIO__CONTACT__SERVICE_ID`.
pub const ENV_PREFIX: &str = "FOLIO";

static CONFIG: OnceLock<ConfigLoadResult> = OnceLock::new();

/// Build the layered configuration: embedded defaults, then the config file,
/// then `.env` and process environment.
///
/// An explicitly given file must exist; the implicit `config.toml` is optional.
pub fn load_config(path: Option<&Path>) -> ConfigLoadResult {
    dotenv::dotenv().ok();

    let file_source = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };
    let env_source = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true);

    let config = match Config::builder()
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
        .add_source(file_source)
        .add_source(env_source)
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config file and FOLIO__* environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => ConfigLoadResult::Success(Box::new(app_config)),
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

/// Load the global configuration once. Later calls return the first result.
pub fn init_config(path: Option<&Path>) -> &'static ConfigLoadResult {
    CONFIG.get_or_init(|| load_config(path))
}

/// Logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> &str {
        self.file.as_deref().unwrap_or("folio.log")
    }
}
