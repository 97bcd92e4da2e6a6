//! File pipeline error types.

use thiserror::Error;

/// Errors surfaced through the file-selection callback.
///
/// Field invalidity is not an error: it is expected state, surfaced through
/// labels and the [`ErrorSummary`](crate::validation::ErrorSummary).
/// Malformed explicit patterns never reach the engine at all; overrides are
/// supplied pre-compiled by the caller.
#[derive(Debug, Error)]
pub enum FileError {
    /// The selected filename's extension is not in the field's accept list.
    #[error("invalid file extension, accepted file extensions are: {allowed}")]
    ExtensionRejected {
        /// The normalized allow-list, comma-joined.
        allowed: String,
    },

    /// Reading the selected file failed.
    #[error("failed to read '{path}': {source}")]
    Read {
        /// The path that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The payload claimed an image content type but could not be decoded.
    #[error("failed to decode image: {source}")]
    Decode {
        /// Underlying decoder error.
        source: image::ImageError,
    },

    /// Re-encoding the resized image failed.
    #[error("failed to encode resized image: {source}")]
    Encode {
        /// Underlying encoder error.
        source: image::ImageError,
    },

    /// The resize worker was cancelled or panicked before completing.
    #[error("file task did not run to completion")]
    TaskFailed,
}
