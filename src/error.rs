//! Error kinds surfaced by the population pipeline.

/// Failures that callers must be able to classify.
///
/// [`PopulationError::DataUnavailable`] covers everything between the remote
/// endpoint and a cleaned dataset: transport errors, timeouts, non-success
/// status codes, unparseable bodies and missing columns. The HTTP layer maps
/// it to `503 Service Unavailable`.
#[derive(Debug, thiserror::Error)]
pub enum PopulationError {
    /// The remote dataset could not be fetched or understood.
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    /// The dashboard was asked for a summary type it does not know.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),
}

impl PopulationError {
    pub fn data_unavailable(msg: impl Into<String>) -> Self {
        Self::DataUnavailable(msg.into())
    }

    /// Stable machine-readable code used in JSON error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DataUnavailable(_) => "data_unavailable",
            Self::InvalidSelection(_) => "invalid_selection",
        }
    }
}

/// Alias for Result with [`PopulationError`]
pub type Result<T> = std::result::Result<T, PopulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(
            PopulationError::data_unavailable("x").code(),
            "data_unavailable"
        );
        assert_eq!(
            PopulationError::InvalidSelection("pie".into()).code(),
            "invalid_selection"
        );
    }

    #[test]
    fn test_display_includes_message() {
        let err = PopulationError::data_unavailable("connection refused");
        assert_eq!(err.to_string(), "data unavailable: connection refused");
    }
}
