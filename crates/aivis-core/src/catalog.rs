use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// A pharmaceutical brand tracked by the simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandDescriptor {
    pub name: String,
    /// Therapeutic focus, e.g. `"Vaccines, Oncology"`.
    #[serde(default)]
    pub specialty: Option<String>,
    /// Market capitalization in billions of USD.
    #[serde(default)]
    pub market_cap: Option<f64>,
}

impl BrandDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specialty: None,
            market_cap: None,
        }
    }

    #[must_use]
    pub fn with_metadata(
        name: impl Into<String>,
        specialty: impl Into<String>,
        market_cap: f64,
    ) -> Self {
        Self {
            name: name.into(),
            specialty: Some(specialty.into()),
            market_cap: Some(market_cap),
        }
    }
}

/// An AI assistant platform on which brand visibility is simulated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformDescriptor {
    pub name: String,
    /// Active users in millions.
    #[serde(default)]
    pub user_base: Option<f64>,
    /// Answer accuracy in `[0.0, 1.0]`.
    #[serde(default)]
    pub accuracy: Option<f64>,
}

impl PlatformDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            user_base: None,
            accuracy: None,
        }
    }

    #[must_use]
    pub fn with_metadata(name: impl Into<String>, user_base: f64, accuracy: f64) -> Self {
        Self {
            name: name.into(),
            user_base: Some(user_base),
            accuracy: Some(accuracy),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub brands: Vec<BrandDescriptor>,
    pub platforms: Vec<PlatformDescriptor>,
}

/// The brand and platform lists the simulator ships with.
#[must_use]
pub fn builtin_catalog() -> Catalog {
    Catalog {
        brands: vec![
            BrandDescriptor::with_metadata("Pfizer", "Vaccines, Oncology", 200.0),
            BrandDescriptor::with_metadata("Moderna", "mRNA Technologies", 150.0),
            BrandDescriptor::with_metadata("Johnson & Johnson", "Diverse Healthcare", 250.0),
            BrandDescriptor::with_metadata("AstraZeneca", "Oncology, Cardiovascular", 180.0),
            BrandDescriptor::with_metadata("Novartis", "Innovative Medicines", 220.0),
            BrandDescriptor::with_metadata("Roche", "Diagnostics, Oncology", 210.0),
            BrandDescriptor::with_metadata("Merck", "Immunotherapy, Diabetes", 190.0),
        ],
        platforms: vec![
            PlatformDescriptor::with_metadata("ChatGPT", 100.0, 0.85),
            PlatformDescriptor::with_metadata("Microsoft Copilot", 75.0, 0.78),
            PlatformDescriptor::with_metadata("Perplexity", 50.0, 0.82),
            PlatformDescriptor::with_metadata("Claude", 60.0, 0.87),
            PlatformDescriptor::with_metadata("Google Gemini", 90.0, 0.80),
        ],
    }
}

/// Load and validate a brand/platform catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let catalog: Catalog = serde_yaml::from_str(&content).map_err(ConfigError::CatalogFileParse)?;

    validate_catalog(&catalog)?;

    Ok(catalog)
}

fn validate_catalog(catalog: &Catalog) -> Result<(), ConfigError> {
    if catalog.brands.is_empty() {
        return Err(ConfigError::Validation(
            "catalog must list at least one brand".to_string(),
        ));
    }
    if catalog.platforms.is_empty() {
        return Err(ConfigError::Validation(
            "catalog must list at least one platform".to_string(),
        ));
    }

    let mut seen_brands = HashSet::new();
    for brand in &catalog.brands {
        if brand.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "brand name must be non-empty".to_string(),
            ));
        }
        if !seen_brands.insert(brand.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate brand name: '{}'",
                brand.name
            )));
        }
        if let Some(cap) = brand.market_cap {
            if !cap.is_finite() || cap < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "brand '{}' has invalid market_cap {cap}; must be a non-negative number",
                    brand.name
                )));
            }
        }
    }

    let mut seen_platforms = HashSet::new();
    for platform in &catalog.platforms {
        if platform.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "platform name must be non-empty".to_string(),
            ));
        }
        if !seen_platforms.insert(platform.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate platform name: '{}'",
                platform.name
            )));
        }
        if let Some(users) = platform.user_base {
            if !users.is_finite() || users < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "platform '{}' has invalid user_base {users}; must be a non-negative number",
                    platform.name
                )));
            }
        }
        if let Some(accuracy) = platform.accuracy {
            if !(0.0..=1.0).contains(&accuracy) {
                return Err(ConfigError::Validation(format!(
                    "platform '{}' has invalid accuracy {accuracy}; must be within [0, 1]",
                    platform.name
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
