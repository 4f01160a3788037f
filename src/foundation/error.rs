/// Convenience result type used across the crate.
pub type TimelineResult<T> = Result<T, TimelineError>;

/// Top-level error taxonomy used by widget APIs.
#[derive(thiserror::Error, Debug)]
pub enum TimelineError {
    /// Invalid user-provided style or drawable data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing a widget frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TimelineError {
    /// Build a [`TimelineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TimelineError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`TimelineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
