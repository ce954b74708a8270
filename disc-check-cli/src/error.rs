use thiserror::Error;

/// Errors that can occur during CLI execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error opening or reading the image
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The scan aborted
    #[error("{0}")]
    Scan(#[from] disc_check_lib::ScanError),

    /// Report serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
