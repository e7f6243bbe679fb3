//! Column identifiers for visibility tables.
//!
//! Display names are the contract with whatever renders the table, so they are
//! kept byte-for-byte stable. Each column also accepts a snake_case alias when
//! parsed from user input.

use std::str::FromStr;

use aivis_core::Variant;
use serde::Serialize;

use crate::error::MetricsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Column {
    Brand,
    BrandSpecialty,
    MarketCap,
    Platform,
    PlatformUserBase,
    PlatformAccuracy,
    VisibilityScore,
    SentimentScore,
    EngagementRate,
    ResearchRelevance,
    ClinicalMentionRate,
    RegulatoryCompliance,
}

const MINIMAL_SCHEMA: &[Column] = &[
    Column::Brand,
    Column::Platform,
    Column::VisibilityScore,
    Column::SentimentScore,
    Column::EngagementRate,
];

const EXTENDED_SCHEMA: &[Column] = &Column::ALL;

impl Column {
    pub const ALL: [Column; 12] = [
        Column::Brand,
        Column::BrandSpecialty,
        Column::MarketCap,
        Column::Platform,
        Column::PlatformUserBase,
        Column::PlatformAccuracy,
        Column::VisibilityScore,
        Column::SentimentScore,
        Column::EngagementRate,
        Column::ResearchRelevance,
        Column::ClinicalMentionRate,
        Column::RegulatoryCompliance,
    ];

    /// Exact column name as exposed in rendered and serialized output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Column::Brand => "Brand",
            Column::BrandSpecialty => "Brand Specialty",
            Column::MarketCap => "Market Cap ($B)",
            Column::Platform => "Platform",
            Column::PlatformUserBase => "Platform User Base (M)",
            Column::PlatformAccuracy => "Platform Accuracy",
            Column::VisibilityScore => "Visibility Score",
            Column::SentimentScore => "Sentiment Score",
            Column::EngagementRate => "Engagement Rate (%)",
            Column::ResearchRelevance => "Research Relevance",
            Column::ClinicalMentionRate => "Clinical Mention Rate",
            Column::RegulatoryCompliance => "Regulatory Compliance",
        }
    }

    #[must_use]
    pub const fn alias(self) -> &'static str {
        match self {
            Column::Brand => "brand",
            Column::BrandSpecialty => "brand_specialty",
            Column::MarketCap => "market_cap",
            Column::Platform => "platform",
            Column::PlatformUserBase => "platform_user_base",
            Column::PlatformAccuracy => "platform_accuracy",
            Column::VisibilityScore => "visibility_score",
            Column::SentimentScore => "sentiment_score",
            Column::EngagementRate => "engagement_rate",
            Column::ResearchRelevance => "research_relevance",
            Column::ClinicalMentionRate => "clinical_mention_rate",
            Column::RegulatoryCompliance => "regulatory_compliance",
        }
    }

    /// Whether the column holds numbers that can be averaged.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        !matches!(
            self,
            Column::Brand | Column::Platform | Column::BrandSpecialty
        )
    }

    /// Columns that make up a table of the given variant, in output order.
    #[must_use]
    pub fn schema(variant: Variant) -> &'static [Column] {
        match variant {
            Variant::Minimal => MINIMAL_SCHEMA,
            Variant::Extended => EXTENDED_SCHEMA,
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Column {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Column::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted) || c.alias() == wanted)
            .ok_or_else(|| MetricsError::UnknownField(wanted.to_string()))
    }
}

/// Column a table may be partitioned by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GroupKey {
    Brand,
    Platform,
}

impl GroupKey {
    #[must_use]
    pub const fn column(self) -> Column {
        match self {
            GroupKey::Brand => Column::Brand,
            GroupKey::Platform => Column::Platform,
        }
    }
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column().name())
    }
}

impl FromStr for GroupKey {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Column>()? {
            Column::Brand => Ok(GroupKey::Brand),
            Column::Platform => Ok(GroupKey::Platform),
            other => Err(MetricsError::UnknownField(format!(
                "'{other}' cannot be used as a group key; expected Brand or Platform"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_display_names_case_insensitively() {
        assert_eq!(
            "visibility score".parse::<Column>().unwrap(),
            Column::VisibilityScore
        );
        assert_eq!(
            "Engagement Rate (%)".parse::<Column>().unwrap(),
            Column::EngagementRate
        );
    }

    #[test]
    fn parses_snake_case_aliases() {
        for column in Column::ALL {
            assert_eq!(column.alias().parse::<Column>().unwrap(), column);
        }
    }

    #[test]
    fn unknown_name_is_unknown_field() {
        let err = "Visibilty Score".parse::<Column>().unwrap_err();
        assert_eq!(err, MetricsError::UnknownField("Visibilty Score".to_string()));
    }

    #[test]
    fn minimal_schema_is_subset_of_extended() {
        let extended = Column::schema(Variant::Extended);
        assert_eq!(extended.len(), 12);
        assert!(Column::schema(Variant::Minimal)
            .iter()
            .all(|c| extended.contains(c)));
    }

    #[test]
    fn identifier_columns_are_not_numeric() {
        assert!(!Column::Brand.is_numeric());
        assert!(!Column::Platform.is_numeric());
        assert!(!Column::BrandSpecialty.is_numeric());
        assert!(Column::MarketCap.is_numeric());
        assert!(Column::RegulatoryCompliance.is_numeric());
    }

    #[test]
    fn group_key_parses_brand_and_platform() {
        assert_eq!("brand".parse::<GroupKey>().unwrap(), GroupKey::Brand);
        assert_eq!("Platform".parse::<GroupKey>().unwrap(), GroupKey::Platform);
    }

    #[test]
    fn group_key_rejects_metric_columns() {
        let err = "visibility_score".parse::<GroupKey>().unwrap_err();
        assert!(matches!(err, MetricsError::UnknownField(ref msg) if msg.contains("group key")));
    }
}
