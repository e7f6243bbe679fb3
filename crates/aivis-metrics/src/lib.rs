//! Synthetic AI visibility metrics for pharmaceutical brands.
//!
//! Builds a brand × platform table of uniformly drawn metrics, then derives
//! per-group means, top-group summaries, and templated strategic insights from
//! it. A [`Session`] owns one table for its whole lifetime.

pub mod aggregate;
pub mod error;
pub mod insights;
pub mod schema;
pub mod session;
pub mod synth;
pub mod types;

pub use aggregate::{profile, summarize, summarize_by_name, GroupProfile, TopGroup};
pub use error::MetricsError;
pub use insights::{insight, strategic_insights, Insight, InsightKind};
pub use schema::{Column, GroupKey};
pub use session::Session;
pub use synth::{generate, metric_range};
pub use types::{ExtendedFields, VisibilityRecord, VisibilityTable};
