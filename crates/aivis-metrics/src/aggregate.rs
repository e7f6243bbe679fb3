//! Group-by-mean aggregation over visibility tables.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::MetricsError;
use crate::schema::{Column, GroupKey};
use crate::types::VisibilityTable;

/// Metrics behind the brand performance scatter view.
pub const BRAND_PERFORMANCE: &[Column] = &[
    Column::VisibilityScore,
    Column::SentimentScore,
    Column::EngagementRate,
];

/// Metrics behind the brand strategic radar view.
pub const BRAND_RADAR: &[Column] = &[
    Column::SentimentScore,
    Column::RegulatoryCompliance,
    Column::ResearchRelevance,
];

/// Metrics behind the platform comparison view.
pub const PLATFORM_COMPARISON: &[Column] = &[
    Column::VisibilityScore,
    Column::PlatformUserBase,
    Column::PlatformAccuracy,
];

/// The group with the highest mean for one metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopGroup {
    pub group: String,
    pub mean: f64,
}

/// Per-group means for a set of metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupProfile {
    pub group: String,
    pub rows: usize,
    pub means: Vec<(Column, f64)>,
}

impl GroupProfile {
    #[must_use]
    pub fn mean(&self, column: Column) -> Option<f64> {
        self.means
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, v)| *v)
    }
}

struct Accumulator<'a> {
    group: &'a str,
    rows: usize,
    sums: Vec<f64>,
}

impl Accumulator<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn mean(&self, idx: usize) -> f64 {
        self.sums[idx] / self.rows as f64
    }
}

/// Return the group whose mean `metric` is highest.
///
/// Ties keep the group that first appears in table order.
///
/// # Errors
///
/// - [`MetricsError::UnknownField`] if `metric` is not a numeric column of
///   this table's schema.
/// - [`MetricsError::EmptyTable`] if the table has no rows.
pub fn summarize(
    table: &VisibilityTable,
    group_key: GroupKey,
    metric: Column,
) -> Result<TopGroup, MetricsError> {
    let groups = accumulate(table, group_key, &[metric])?;

    let mut best: Option<&Accumulator<'_>> = None;
    for acc in &groups {
        match best {
            Some(current) if acc.mean(0) <= current.mean(0) => {}
            _ => best = Some(acc),
        }
    }

    best.map(|acc| TopGroup {
        group: acc.group.to_string(),
        mean: acc.mean(0),
    })
    .ok_or(MetricsError::EmptyTable)
}

/// [`summarize`] with the group key and metric given by column name.
///
/// # Errors
///
/// Same as [`summarize`], plus [`MetricsError::UnknownField`] when either
/// name does not parse.
pub fn summarize_by_name(
    table: &VisibilityTable,
    group_key: &str,
    metric: &str,
) -> Result<TopGroup, MetricsError> {
    summarize(table, group_key.parse()?, metric.parse()?)
}

/// Mean of each metric in `metrics` for every group, in first-occurrence order.
///
/// # Errors
///
/// Same as [`summarize`].
pub fn profile(
    table: &VisibilityTable,
    group_key: GroupKey,
    metrics: &[Column],
) -> Result<Vec<GroupProfile>, MetricsError> {
    let groups = accumulate(table, group_key, metrics)?;
    Ok(groups
        .iter()
        .map(|acc| GroupProfile {
            group: acc.group.to_string(),
            rows: acc.rows,
            means: metrics
                .iter()
                .enumerate()
                .map(|(idx, column)| (*column, acc.mean(idx)))
                .collect(),
        })
        .collect())
}

fn accumulate<'a>(
    table: &'a VisibilityTable,
    group_key: GroupKey,
    metrics: &[Column],
) -> Result<Vec<Accumulator<'a>>, MetricsError> {
    if !table.has_column(group_key.column()) {
        return Err(MetricsError::UnknownField(group_key.to_string()));
    }
    for metric in metrics {
        if !metric.is_numeric() || !table.has_column(*metric) {
            return Err(MetricsError::UnknownField(metric.to_string()));
        }
    }
    if table.is_empty() {
        return Err(MetricsError::EmptyTable);
    }

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Accumulator<'a>> = Vec::new();

    for record in table.records() {
        let key = record.text(group_key.column()).unwrap_or_default();
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(Accumulator {
                group: key,
                rows: 0,
                sums: vec![0.0; metrics.len()],
            });
            groups.len() - 1
        });

        let acc = &mut groups[slot];
        acc.rows += 1;
        for (idx, metric) in metrics.iter().enumerate() {
            acc.sums[idx] += record.numeric(*metric).unwrap_or_default();
        }
    }

    Ok(groups)
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
