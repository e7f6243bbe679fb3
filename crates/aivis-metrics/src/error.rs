use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricsError {
    /// Synthesis or table construction was given unusable input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Aggregation over a table with no rows.
    #[error("cannot aggregate an empty table")]
    EmptyTable,

    /// The named column is unknown, absent from the table's schema, or not
    /// usable in the requested position.
    #[error("unknown field: {0}")]
    UnknownField(String),
}
