use thiserror::Error;

/// Input rejected by the revenue overview
///
/// Inputs normally come from closed-set selects, so any of these means an
/// upstream bug rather than a user mistake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("unknown time range: {0:?}")]
    InvalidRange(String),

    #[error("unknown {field} filter: {value:?}")]
    InvalidFilter { field: &'static str, value: String },

    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
}
