//! Synthetic visibility table generation.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use aivis_core::{BrandDescriptor, PlatformDescriptor, Variant};
use rand::Rng;

use crate::error::MetricsError;
use crate::schema::Column;
use crate::types::{ExtendedFields, VisibilityRecord, VisibilityTable};

/// Closed range each drawn metric is sampled from, or `None` for columns that
/// are copied from descriptors rather than drawn.
#[must_use]
pub fn metric_range(column: Column) -> Option<RangeInclusive<f64>> {
    match column {
        Column::VisibilityScore => Some(20.0..=80.0),
        Column::SentimentScore => Some(-1.0..=1.0),
        Column::EngagementRate => Some(0.1..=5.0),
        Column::ResearchRelevance | Column::ClinicalMentionRate => Some(0.1..=1.0),
        Column::RegulatoryCompliance => Some(0.5..=1.0),
        _ => None,
    }
}

/// Synthesize one row per (brand, platform) pair.
///
/// Rows are emitted brand-major in input order. Every drawn metric is uniform
/// over its [`metric_range`] and rounded to two decimals. Draw order per row is
/// fixed, so a seeded `rng` yields a reproducible table.
///
/// # Errors
///
/// Returns [`MetricsError::InvalidInput`] if either list is empty, a name
/// repeats, or `variant` is [`Variant::Extended`] and a descriptor lacks its
/// optional metadata.
pub fn generate<R: Rng>(
    brands: &[BrandDescriptor],
    platforms: &[PlatformDescriptor],
    variant: Variant,
    rng: &mut R,
) -> Result<VisibilityTable, MetricsError> {
    validate_inputs(brands, platforms, variant)?;

    let mut records = Vec::with_capacity(brands.len() * platforms.len());
    for brand in brands {
        for platform in platforms {
            let visibility_score = draw(rng, Column::VisibilityScore);
            let sentiment_score = draw(rng, Column::SentimentScore);
            let engagement_rate = draw(rng, Column::EngagementRate);

            let extended = match variant {
                Variant::Minimal => None,
                Variant::Extended => Some(ExtendedFields {
                    brand_specialty: brand.specialty.clone().unwrap_or_default(),
                    market_cap: brand.market_cap.unwrap_or_default(),
                    platform_user_base: platform.user_base.unwrap_or_default(),
                    platform_accuracy: platform.accuracy.unwrap_or_default(),
                    research_relevance: draw(rng, Column::ResearchRelevance),
                    clinical_mention_rate: draw(rng, Column::ClinicalMentionRate),
                    regulatory_compliance: draw(rng, Column::RegulatoryCompliance),
                }),
            };

            records.push(VisibilityRecord {
                brand: brand.name.clone(),
                platform: platform.name.clone(),
                visibility_score,
                sentiment_score,
                engagement_rate,
                extended,
            });
        }
    }

    tracing::debug!(
        brands = brands.len(),
        platforms = platforms.len(),
        rows = records.len(),
        %variant,
        "synthesized visibility table"
    );

    Ok(VisibilityTable::from_generated(variant, records))
}

fn draw<R: Rng>(rng: &mut R, column: Column) -> f64 {
    let range = metric_range(column).unwrap_or(0.0..=0.0);
    round2(rng.random_range(range))
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn validate_inputs(
    brands: &[BrandDescriptor],
    platforms: &[PlatformDescriptor],
    variant: Variant,
) -> Result<(), MetricsError> {
    if brands.is_empty() {
        return Err(MetricsError::InvalidInput(
            "at least one brand is required".to_string(),
        ));
    }
    if platforms.is_empty() {
        return Err(MetricsError::InvalidInput(
            "at least one platform is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for brand in brands {
        if !seen.insert(brand.name.as_str()) {
            return Err(MetricsError::InvalidInput(format!(
                "duplicate brand '{}'",
                brand.name
            )));
        }
        if variant == Variant::Extended && (brand.specialty.is_none() || brand.market_cap.is_none())
        {
            return Err(MetricsError::InvalidInput(format!(
                "brand '{}' needs specialty and market_cap for the extended variant",
                brand.name
            )));
        }
    }

    seen.clear();
    for platform in platforms {
        if !seen.insert(platform.name.as_str()) {
            return Err(MetricsError::InvalidInput(format!(
                "duplicate platform '{}'",
                platform.name
            )));
        }
        if variant == Variant::Extended
            && (platform.user_base.is_none() || platform.accuracy.is_none())
        {
            return Err(MetricsError::InvalidInput(format!(
                "platform '{}' needs user_base and accuracy for the extended variant",
                platform.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "synth_test.rs"]
mod tests;
