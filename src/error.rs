use thiserror::Error;

use crate::core::ChartKind;

pub type ShowcaseResult<T> = Result<T, ShowcaseError>;

#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error("chart kind `{0}` has no registered widget factory")]
    UnresolvedKind(ChartKind),

    #[error("unknown chart identifier: `{0}`")]
    UnknownIdentifier(String),

    #[error("widget construction failed for `{kind}`: {reason}")]
    DrawFailure { kind: ChartKind, reason: String },

    #[error("container has no measurable content box: width={width}, height={height}")]
    MeasurementUnavailable { width: f64, height: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl ShowcaseError {
    /// Shorthand used by widget factories to report a failed construction.
    #[must_use]
    pub fn draw_failure(kind: ChartKind, reason: impl Into<String>) -> Self {
        Self::DrawFailure {
            kind,
            reason: reason.into(),
        }
    }
}
