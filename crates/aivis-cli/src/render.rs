//! Plain-text and markdown rendering of session output.

use aivis_core::Variant;
use aivis_metrics::{Column, GroupProfile, Insight, Session, TopGroup, VisibilityTable};

/// Fixed-width text dump of every row, one column per schema entry.
pub(crate) fn table_text(table: &VisibilityTable) -> String {
    let schema = table.schema();
    let widths: Vec<usize> = schema
        .iter()
        .map(|column| {
            table
                .records()
                .iter()
                .map(|r| r.display_value(*column).chars().count())
                .chain(std::iter::once(column.name().chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let mut lines = Vec::with_capacity(table.len() + 1);
    lines.push(pad_row(schema.iter().map(|c| c.name().to_string()), &widths));
    for record in table.records() {
        lines.push(pad_row(
            schema.iter().map(|c| record.display_value(*c)),
            &widths,
        ));
    }
    lines.join("\n")
}

fn pad_row(cells: impl Iterator<Item = String>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

pub(crate) fn top_group(group: &str, metric: &str, top: &TopGroup) -> String {
    format!(
        "top {group} by mean {metric}: {} ({:.2})",
        top.group, top.mean
    )
}

pub(crate) fn insights(insights: &[Insight]) -> String {
    insights
        .iter()
        .map(|i| format!("{}: {}", i.title, i.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Markdown report: header, insights, and one table per grouped view.
///
/// Radar and platform views are only emitted for extended sessions.
///
/// # Errors
///
/// Returns an error if any aggregate cannot be computed.
pub(crate) fn report(session: &Session, generated_at: &str) -> anyhow::Result<String> {
    let table = session.table();
    let catalog = session.catalog();
    let seed_label = session
        .seed()
        .map_or_else(|| "random".to_string(), |s| s.to_string());

    let mut out = vec![
        "# Pharmaceutical AI Visibility Report".to_string(),
        String::new(),
        format!("**Generated**: {generated_at}"),
        format!("**Variant**: {}", table.variant()),
        format!("**Seed**: {seed_label}"),
        format!(
            "**Rows**: {} ({} brands × {} platforms)",
            table.len(),
            catalog.brands.len(),
            catalog.platforms.len()
        ),
        String::new(),
        "---".to_string(),
        String::new(),
        "## Strategic Insights".to_string(),
        String::new(),
    ];

    for insight in session.insights()? {
        out.push(format!("### {}", insight.title));
        out.push(String::new());
        out.push(insight.text);
        out.push(String::new());
    }

    push_profile_section(
        &mut out,
        "Brand Performance",
        "Brand",
        &session.brand_performance()?,
    );

    if table.variant() == Variant::Extended {
        push_profile_section(
            &mut out,
            "Brand Strategic Radar",
            "Brand",
            &session.brand_radar()?,
        );
        push_profile_section(
            &mut out,
            "AI Platform Comparison",
            "Platform",
            &session.platform_comparison()?,
        );
    }

    Ok(out.join("\n").trim_end().to_string())
}

fn push_profile_section(
    out: &mut Vec<String>,
    heading: &str,
    group_label: &str,
    profiles: &[GroupProfile],
) {
    let columns: Vec<Column> = profiles
        .first()
        .map(|p| p.means.iter().map(|(c, _)| *c).collect())
        .unwrap_or_default();

    out.push(format!("## {heading}"));
    out.push(String::new());

    let header: Vec<&str> = std::iter::once(group_label)
        .chain(columns.iter().map(|c| c.name()))
        .collect();
    out.push(format!("| {} |", header.join(" | ")));
    out.push(format!(
        "|{}|",
        header
            .iter()
            .map(|h| "-".repeat(h.len() + 2))
            .collect::<Vec<_>>()
            .join("|")
    ));

    for profile in profiles {
        let cells: Vec<String> = std::iter::once(profile.group.clone())
            .chain(profile.means.iter().map(|(_, v)| format!("{v:.2}")))
            .collect();
        out.push(format!("| {} |", cells.join(" | ")));
    }
    out.push(String::new());
}
