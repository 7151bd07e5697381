/// Convenience result type used across sketchpath.
pub type SketchResult<T> = Result<T, SketchError>;

/// Error taxonomy for parsing, grouping and tracing.
#[derive(thiserror::Error, Debug)]
pub enum SketchError {
    /// Malformed markup or input that is not UTF-8.
    #[error("document error: {0}")]
    Document(String),

    /// `d` data of one element that could not be parsed.
    #[error("path data error in {element}: {message}")]
    PathData {
        /// `name#id`, or `name at row:col` when the element has no id.
        element: String,
        message: String,
    },

    /// Invalid configuration values.
    #[error("validation error: {0}")]
    Validation(String),

    /// The external tracer could not be run or reported failure.
    #[error("trace error: {0}")]
    Trace(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SketchError {
    /// Build a [`SketchError::Document`] value.
    pub fn document(msg: impl Into<String>) -> Self {
        Self::Document(msg.into())
    }

    /// Build a [`SketchError::PathData`] value for the element labelled `element`.
    pub fn path_data(element: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::PathData {
            element: element.into(),
            message: msg.into(),
        }
    }

    /// Build a [`SketchError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SketchError::Trace`] value.
    pub fn trace(msg: impl Into<String>) -> Self {
        Self::Trace(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
