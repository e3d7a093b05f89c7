use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("invalid section `{id}`: {reason}")]
    InvalidSection { id: &'static str, reason: &'static str },

    /// A section element has not been mounted or measured yet.
    #[error("layout not ready: section `{0}` has no element")]
    LayoutNotReady(&'static str),

    #[error("degenerate geometry: max scroll is {max_scroll}")]
    DegenerateGeometry { max_scroll: f64 },

    #[error("measured {measured} sections but {registered} are registered")]
    MeasurementMismatch { measured: usize, registered: usize },
}
