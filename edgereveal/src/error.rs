use crate::Edge;

/// Result type alias for configuration-time operations.
pub type Result<T, E = ConfigError> = core::result::Result<T, E>;

/// A caller configuration error.
///
/// These are raised at configuration or first-layout time, before any gesture can run. Misuse
/// at runtime (duplicate adds, completing an edge that is not triggering, ...) is tolerated and
/// never surfaces as an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The edge widget creator did not produce a widget.
    #[error("the {edge} edge widget creator returned no widget")]
    MissingEdgeWidget { edge: Edge },

    /// The edge widget asked to fill its parent; its height must be exact or wrap its content.
    #[error("the {edge} edge widget must have an exact or wrap-content height")]
    NonExactEdgeHeight { edge: Edge },
}

impl ConfigError {
    pub fn edge(&self) -> Edge {
        match self {
            Self::MissingEdgeWidget { edge } | Self::NonExactEdgeHeight { edge } => *edge,
        }
    }
}
