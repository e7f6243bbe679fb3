use std::collections::HashSet;

use aivis_core::Variant;
use serde::Serialize;

use crate::error::MetricsError;
use crate::schema::Column;

/// One simulated (brand, platform) observation.
///
/// Serialized keys are the exact [`Column::name`] strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisibilityRecord {
    #[serde(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "Platform")]
    pub platform: String,
    /// Range `[20, 80]`.
    #[serde(rename = "Visibility Score")]
    pub visibility_score: f64,
    /// Range `[-1, 1]`.
    #[serde(rename = "Sentiment Score")]
    pub sentiment_score: f64,
    /// Percent, range `[0.1, 5.0]`.
    #[serde(rename = "Engagement Rate (%)")]
    pub engagement_rate: f64,
    /// Present exactly when the owning table is [`Variant::Extended`].
    #[serde(flatten)]
    pub extended: Option<ExtendedFields>,
}

/// Descriptor metadata and domain metrics carried by extended rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtendedFields {
    #[serde(rename = "Brand Specialty")]
    pub brand_specialty: String,
    #[serde(rename = "Market Cap ($B)")]
    pub market_cap: f64,
    #[serde(rename = "Platform User Base (M)")]
    pub platform_user_base: f64,
    #[serde(rename = "Platform Accuracy")]
    pub platform_accuracy: f64,
    /// Range `[0.1, 1.0]`.
    #[serde(rename = "Research Relevance")]
    pub research_relevance: f64,
    /// Range `[0.1, 1.0]`.
    #[serde(rename = "Clinical Mention Rate")]
    pub clinical_mention_rate: f64,
    /// Range `[0.5, 1.0]`.
    #[serde(rename = "Regulatory Compliance")]
    pub regulatory_compliance: f64,
}

impl VisibilityRecord {
    /// Numeric value of `column`, or `None` for text columns and for extended
    /// columns on a minimal row.
    #[must_use]
    pub fn numeric(&self, column: Column) -> Option<f64> {
        let ext = self.extended.as_ref();
        match column {
            Column::VisibilityScore => Some(self.visibility_score),
            Column::SentimentScore => Some(self.sentiment_score),
            Column::EngagementRate => Some(self.engagement_rate),
            Column::MarketCap => ext.map(|e| e.market_cap),
            Column::PlatformUserBase => ext.map(|e| e.platform_user_base),
            Column::PlatformAccuracy => ext.map(|e| e.platform_accuracy),
            Column::ResearchRelevance => ext.map(|e| e.research_relevance),
            Column::ClinicalMentionRate => ext.map(|e| e.clinical_mention_rate),
            Column::RegulatoryCompliance => ext.map(|e| e.regulatory_compliance),
            Column::Brand | Column::Platform | Column::BrandSpecialty => None,
        }
    }

    /// Text value of `column`, or `None` for numeric columns.
    #[must_use]
    pub fn text(&self, column: Column) -> Option<&str> {
        match column {
            Column::Brand => Some(self.brand.as_str()),
            Column::Platform => Some(self.platform.as_str()),
            Column::BrandSpecialty => self.extended.as_ref().map(|e| e.brand_specialty.as_str()),
            _ => None,
        }
    }

    /// Value of `column` rendered for display with two decimals for numbers.
    #[must_use]
    pub fn display_value(&self, column: Column) -> String {
        match self.text(column) {
            Some(text) => text.to_string(),
            None => self
                .numeric(column)
                .map(|v| format!("{v:.2}"))
                .unwrap_or_default(),
        }
    }
}

/// Immutable table of visibility records, brand-major then platform-minor
/// when produced by [`crate::generate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisibilityTable {
    variant: Variant,
    records: Vec<VisibilityRecord>,
}

impl VisibilityTable {
    /// Build a table from hand-made rows.
    ///
    /// Metric ranges are not enforced, so fixtures may use arbitrary values.
    /// A zero-row table is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::InvalidInput`] if a (brand, platform) pair
    /// repeats or a row's extended fields do not match `variant`.
    pub fn from_records(
        variant: Variant,
        records: Vec<VisibilityRecord>,
    ) -> Result<Self, MetricsError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert((record.brand.as_str(), record.platform.as_str())) {
                return Err(MetricsError::InvalidInput(format!(
                    "duplicate row for brand '{}' on platform '{}'",
                    record.brand, record.platform
                )));
            }
            let has_extended = record.extended.is_some();
            if has_extended != (variant == Variant::Extended) {
                return Err(MetricsError::InvalidInput(format!(
                    "row for brand '{}' on platform '{}' does not match the {variant} schema",
                    record.brand, record.platform
                )));
            }
        }
        Ok(Self { variant, records })
    }

    /// Construction path for the synthesizer, which upholds the invariants itself.
    pub(crate) fn from_generated(variant: Variant, records: Vec<VisibilityRecord>) -> Self {
        Self { variant, records }
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn records(&self) -> &[VisibilityRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn schema(&self) -> &'static [Column] {
        Column::schema(self.variant)
    }

    #[must_use]
    pub fn has_column(&self, column: Column) -> bool {
        self.schema().contains(&column)
    }
}
