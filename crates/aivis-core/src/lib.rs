//! Shared descriptor types and configuration for the AI visibility simulator.

pub mod app_config;
pub mod catalog;
pub mod config;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, Variant};
pub use catalog::{
    builtin_catalog, load_catalog, BrandDescriptor, Catalog, PlatformDescriptor,
};
pub use config::{load_app_config, load_app_config_from_env};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    CatalogFileParse(#[from] serde_yaml::Error),

    #[error("catalog validation failed: {0}")]
    Validation(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
