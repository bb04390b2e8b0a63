use thiserror::Error;

/// Errors raised at the tool-panel boundary when element or upload data
/// is malformed. Core collection operations never fail; they clamp or no-op.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A shape kind string did not match any known kind.
    #[error("unknown shape kind: {0:?}")]
    UnknownShapeKind(String),

    /// An uploaded file is not one of the accepted image formats.
    #[error("unsupported image format (PNG, JPEG or GIF required)")]
    UnsupportedImageFormat,

    /// An uploaded file exceeds the upload size limit.
    #[error("image is {size} bytes, upload limit is {limit} bytes")]
    ImageTooLarge { size: usize, limit: usize },

    /// An uploaded file claimed to be an image but could not be decoded.
    #[error("could not decode image: {0}")]
    ImageDecode(String),
}
