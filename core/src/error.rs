use thiserror::Error;

/// Failures raised by index build and evaluation. Every variant is
/// terminal for the operation that raised it; nothing here is retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Two documents shared a name during index build.
    #[error("duplicate document name: {0}")]
    DuplicateDocument(String),
    /// A query was scored but has no entry in the judgment table.
    #[error("no relevance judgment for query: {0}")]
    MissingJudgment(String),
    /// A mean was requested over zero scored queries.
    #[error("no queries to evaluate")]
    EmptyAggregate,
}
