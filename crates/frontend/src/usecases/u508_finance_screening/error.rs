use thiserror::Error;

/// Everything that can end a finance screening action.
///
/// The `Display` text is what the summary surface shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Please choose an Excel file first")]
    MissingFile,

    /// Non-2xx response; carries the error body as text
    #[error("{0}")]
    Http(String),

    #[error("Failed to send request: {0}")]
    Transport(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize config: {0}")]
    Encode(String),

    #[error("Failed to save file: {0}")]
    Download(String),
}
