//! Templated strategic insights derived from aggregate winners.

use aivis_core::Variant;
use serde::Serialize;

use crate::aggregate::summarize;
use crate::error::MetricsError;
use crate::schema::{Column, GroupKey};
use crate::types::VisibilityTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InsightKind {
    TopBrand,
    StrategicPlatform,
    ResearchLeadership,
    RegulatoryCompliance,
}

impl InsightKind {
    pub const ALL: [InsightKind; 4] = [
        InsightKind::TopBrand,
        InsightKind::StrategicPlatform,
        InsightKind::ResearchLeadership,
        InsightKind::RegulatoryCompliance,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            InsightKind::TopBrand => "Top Performing Brand",
            InsightKind::StrategicPlatform => "Strategic Platform",
            InsightKind::ResearchLeadership => "Research Leadership",
            InsightKind::RegulatoryCompliance => "Regulatory Compliance",
        }
    }

    #[must_use]
    pub const fn group_key(self) -> GroupKey {
        match self {
            InsightKind::StrategicPlatform => GroupKey::Platform,
            _ => GroupKey::Brand,
        }
    }

    #[must_use]
    pub const fn metric(self) -> Column {
        match self {
            InsightKind::TopBrand | InsightKind::StrategicPlatform => Column::VisibilityScore,
            InsightKind::ResearchLeadership => Column::ResearchRelevance,
            InsightKind::RegulatoryCompliance => Column::RegulatoryCompliance,
        }
    }

    /// Whether this insight can be produced for a table of `variant`.
    #[must_use]
    pub fn applies_to(self, variant: Variant) -> bool {
        Column::schema(variant).contains(&self.metric())
    }

    fn render(self, group: &str) -> String {
        match self {
            InsightKind::TopBrand => format!("{group} leads in AI visibility metrics"),
            InsightKind::StrategicPlatform => format!(
                "{group} offers the best combination of user base and visibility for pharmaceutical brands"
            ),
            InsightKind::ResearchLeadership => format!(
                "{group} demonstrates highest research relevance in AI-driven knowledge platforms"
            ),
            InsightKind::RegulatoryCompliance => {
                format!("{group} leads in regulatory compliance and positive brand sentiment")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: &'static str,
    pub text: String,
    pub group: String,
    pub mean: f64,
}

/// Produce one insight for `kind`.
///
/// # Errors
///
/// Propagates [`summarize`] errors; an extended-only insight on a minimal
/// table yields [`MetricsError::UnknownField`].
pub fn insight(table: &VisibilityTable, kind: InsightKind) -> Result<Insight, MetricsError> {
    let top = summarize(table, kind.group_key(), kind.metric())?;
    Ok(Insight {
        kind,
        title: kind.title(),
        text: kind.render(&top.group),
        group: top.group,
        mean: top.mean,
    })
}

/// Every insight applicable to the table's variant, in display order.
///
/// # Errors
///
/// Returns [`MetricsError::EmptyTable`] for a zero-row table.
pub fn strategic_insights(table: &VisibilityTable) -> Result<Vec<Insight>, MetricsError> {
    InsightKind::ALL
        .into_iter()
        .filter(|kind| kind.applies_to(table.variant()))
        .map(|kind| insight(table, kind))
        .collect()
}
