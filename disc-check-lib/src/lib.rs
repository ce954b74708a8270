//! Streaming verification of raw CD-ROM sector images.
//!
//! Drives the `disc-check-core` classifier over a whole image file through
//! a bounded, reusable queue, and accumulates the per-format tallies that
//! make up the final report. Used by the CLI; no terminal concerns live
//! here.

pub mod report;
pub mod scanner;

pub use report::ScanReport;
pub use scanner::{DEFAULT_QUEUE_CAPACITY, ScanOptions, scan_image};

// Re-export core types used across crate boundaries.
pub use disc_check_core::{
    Classification, EccTables, Msf, ReadSeek, ScanError, SectorFormat, SectorKind, SectorVerdict,
};
