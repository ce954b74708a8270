use thiserror::Error;

/// Errors that can abort an image scan.
///
/// Per-sector integrity failures are not errors at this level; they are
/// recorded in the scan tallies and the scan continues.
#[derive(Debug, Error)]
pub enum ScanError {
    /// I/O error while opening, seeking or reading the image
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The scan queue cannot hold even one raw sector
    #[error("scan queue of {capacity} bytes is smaller than one raw sector ({minimum} bytes)")]
    QueueTooSmall { capacity: usize, minimum: usize },
}
