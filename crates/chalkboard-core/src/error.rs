//! Error types for canvas operations.

use crate::elements::ElementId;
use thiserror::Error;

/// Errors raised by element and interaction operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    /// An element kind or tool name that the element model does not know.
    #[error("Type not recognised: {0}")]
    UnrecognizedType(String),
    /// Text width could not be measured, so the text box cannot be sized.
    #[error("Text measurement unavailable")]
    MeasurementUnavailable,
    /// No element of the expected kind exists at this id.
    #[error("No element with id {0}")]
    UnknownElement(ElementId),
}

/// Result type for canvas operations.
pub type CanvasResult<T> = Result<T, CanvasError>;
