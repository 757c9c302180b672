/// Errors that can occur while printing a template tree.
///
/// Printing is a single-attempt, deterministic transformation: every variant
/// is fatal for the current call and nothing is retried.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PrintError {
    /// A visited node's kind has no registered printer. This is a
    /// compatibility error between parser and printer, not a data error.
    #[error("no printer registered for `{0}`")]
    UnknownConstruct(&'static str),

    /// The expression bridge failed to render an embedded script fragment.
    #[error("expression render error: {0}")]
    Expression(String),

    /// A printer was handed a node violating its structural contract.
    /// Fail-fast is preferred over emitting best-effort output.
    #[error("malformed `{node}` node: {reason}")]
    Malformed {
        node: &'static str,
        reason: &'static str,
    },
}
