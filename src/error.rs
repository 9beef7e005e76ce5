//! Error types for rs-article-media.
//!
//! The walker and the rendition scanner never fail; these errors only come
//! from the convenience entry points that own parsing and input handling.

/// Error type for extraction entry points.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input document was empty or contained only whitespace.
    #[error("Document is empty")]
    EmptyDocument,

    /// The supplied options cannot be used for extraction.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// Reading the input document failed.
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
