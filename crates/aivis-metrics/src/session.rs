//! One synthesized table plus the aggregate views computed from it.

use aivis_core::{Catalog, Variant};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::aggregate::{
    profile, summarize, GroupProfile, TopGroup, BRAND_PERFORMANCE, BRAND_RADAR,
    PLATFORM_COMPARISON,
};
use crate::error::MetricsError;
use crate::insights::{strategic_insights, Insight};
use crate::schema::{Column, GroupKey};
use crate::synth::generate;
use crate::types::VisibilityTable;

/// Owns the table for one viewing session.
///
/// The table is synthesized once in [`Session::start`] and never regenerated.
/// Every read goes through the same instance; separate sessions hold
/// independent tables.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    seed: Option<u64>,
    table: VisibilityTable,
}

impl Session {
    /// Synthesize the session table from `catalog`.
    ///
    /// With `seed` set the table is reproducible; otherwise it is drawn from
    /// the thread-local generator.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::InvalidInput`] if the catalog cannot produce a
    /// table of `variant`.
    pub fn start(
        catalog: Catalog,
        variant: Variant,
        seed: Option<u64>,
    ) -> Result<Self, MetricsError> {
        let table = match seed {
            Some(seed) => generate(
                &catalog.brands,
                &catalog.platforms,
                variant,
                &mut StdRng::seed_from_u64(seed),
            )?,
            None => generate(
                &catalog.brands,
                &catalog.platforms,
                variant,
                &mut rand::rng(),
            )?,
        };

        tracing::info!(
            rows = table.len(),
            %variant,
            seeded = seed.is_some(),
            "visibility session started"
        );

        Ok(Self {
            catalog,
            seed,
            table,
        })
    }

    #[must_use]
    pub fn table(&self) -> &VisibilityTable {
        &self.table
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// See [`summarize`].
    ///
    /// # Errors
    ///
    /// Propagates [`summarize`] errors.
    pub fn summarize(&self, group_key: GroupKey, metric: Column) -> Result<TopGroup, MetricsError> {
        summarize(&self.table, group_key, metric)
    }

    /// See [`strategic_insights`].
    ///
    /// # Errors
    ///
    /// Propagates [`strategic_insights`] errors.
    pub fn insights(&self) -> Result<Vec<Insight>, MetricsError> {
        strategic_insights(&self.table)
    }

    /// Visibility, sentiment and engagement means per brand.
    ///
    /// # Errors
    ///
    /// Propagates [`profile`] errors.
    pub fn brand_performance(&self) -> Result<Vec<GroupProfile>, MetricsError> {
        profile(&self.table, GroupKey::Brand, BRAND_PERFORMANCE)
    }

    /// Sentiment, compliance and research means per brand. Extended tables only.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::UnknownField`] for a minimal table.
    pub fn brand_radar(&self) -> Result<Vec<GroupProfile>, MetricsError> {
        profile(&self.table, GroupKey::Brand, BRAND_RADAR)
    }

    /// Visibility, user base and accuracy means per platform. Extended tables only.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::UnknownField`] for a minimal table.
    pub fn platform_comparison(&self) -> Result<Vec<GroupProfile>, MetricsError> {
        profile(&self.table, GroupKey::Platform, PLATFORM_COMPARISON)
    }
}
