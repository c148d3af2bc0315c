/// Convenience result type used across Genoform.
pub type GenoformResult<T> = Result<T, GenoformError>;

/// Top-level error taxonomy used by the crate's APIs.
#[derive(thiserror::Error, Debug)]
pub enum GenoformError {
    /// Invalid user-provided input (trait values, factors, path text).
    #[error("validation error: {0}")]
    Validation(String),

    /// Geometric preconditions not met (degenerate contours, separator counts).
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Rendering surface or export failures.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GenoformError {
    /// Build a [`GenoformError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GenoformError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`GenoformError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
