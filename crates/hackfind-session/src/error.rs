use thiserror::Error;

/// Pipeline-fatal failures surfaced to the caller of a location event.
///
/// Collaborator failures (geocoder, search provider, missing credential) are
/// absorbed inside the pipeline and never appear here.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The caller supplied an out-of-range coordinate.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(#[from] hackfind_core::CoreError),

    /// The full pipeline step exceeded its wall-clock budget.
    #[error("location step exceeded its {budget_secs}s budget")]
    StepTimeout { budget_secs: u64 },
}
