pub mod admin_conf;
pub mod app_conf;
pub mod store_conf;

pub use admin_conf::AdminConfig;
pub use app_conf::AppConfig;
pub use store_conf::StoreConfig;

/// Common configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}
