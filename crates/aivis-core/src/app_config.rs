use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Which column set a synthesized table carries.
///
/// `Minimal` tables hold the three core metrics only. `Extended` tables also
/// copy descriptor metadata onto every row and draw the three domain metrics
/// (research relevance, clinical mention rate, regulatory compliance).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Minimal,
    #[default]
    Extended,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Minimal => write!(f, "minimal"),
            Variant::Extended => write!(f, "extended"),
        }
    }
}

impl std::str::FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(Variant::Minimal),
            "extended" => Ok(Variant::Extended),
            other => Err(format!(
                "unknown variant '{other}'; expected 'minimal' or 'extended'"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// YAML catalog to load. `None` selects the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    pub variant: Variant,
    /// Fixed RNG seed. `None` draws from the thread-local generator.
    pub seed: Option<u64>,
}
