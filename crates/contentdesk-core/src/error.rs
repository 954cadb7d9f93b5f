//! Error types for Content Desk

use thiserror::Error;

/// Main error type for Content Desk operations
#[derive(Error, Debug)]
pub enum ContentError {
    /// Clipboard was unavailable or rejected the write
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Exporting the card source failed
    #[error("Export error: {0}")]
    Export(String),

    /// The user dismissed the save dialog
    #[error("Export cancelled")]
    ExportCancelled,

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snippet index outside the catalog
    #[error("Snippet not found: {0}")]
    UnknownSnippet(usize),

    /// Field key not present in the form schema
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Value kind does not match the field's declared kind
    #[error("Field {key} expects a {expected} value")]
    FieldKindMismatch {
        key: String,
        expected: &'static str,
    },

    /// Reported by the save collaborator
    #[error("Save failed: {0}")]
    Save(String),

    /// Existing entity was not a JSON object
    #[error("Invalid entity: {0}")]
    InvalidEntity(String),
}

/// Result type alias using ContentError
pub type ContentResult<T> = Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContentError::UnknownSnippet(7);
        assert_eq!(format!("{}", err), "Snippet not found: 7");

        let err = ContentError::FieldKindMismatch {
            key: "allowLikes".to_string(),
            expected: "flag",
        };
        assert_eq!(err.to_string(), "Field allowLikes expects a flag value");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: ContentError = io_err.into();
        assert!(matches!(err, ContentError::Io(_)));
    }
}
