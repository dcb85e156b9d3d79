//! Error types for the GR layout library.
//!
//! This module defines all error types that can occur while loading shipment
//! data and laying out a goods-receipt document.

/// Result type alias for GR layout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document generation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The drawing collaborator rejected an operation
    #[error("Drawing surface error: {0}")]
    Surface(String),

    /// Image could not be placed (missing asset, undecodable data)
    #[error("Image error: {0}")]
    Image(String),

    /// JSON decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<crate::writer::ImageError> for Error {
    fn from(err: crate::writer::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_error() {
        let err = Error::Surface("table rendering failed".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Drawing surface error"));
        assert!(msg.contains("table rendering failed"));
    }

    #[test]
    fn test_image_error_message() {
        let err = Error::Image("asset 'logo' not registered".to_string());
        assert!(format!("{}", err).starts_with("Image error"));
        assert!(format!("{}", err).contains("logo"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_image_handler_error_conversion() {
        let err: Error = crate::writer::ImageError::UnsupportedFormat.into();
        assert!(matches!(err, Error::Image(_)));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
