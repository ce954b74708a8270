//! Core verification primitives for raw CD-ROM sector images.
//!
//! This crate contains the pieces with actual algorithmic content:
//!
//! - GF(256) lookup tables shared by the EDC/ECC routines
//! - the 32-bit EDC checksum engine
//! - the P/Q parity product-code verifier
//! - the per-sector format classifier
//!
//! Everything here is pure: no I/O, no global state. Tables are built once
//! and passed by shared reference into every call.

use std::io::{Read, Seek};

pub mod ecc;
pub mod edc;
pub mod error;
pub mod sector;
pub mod tables;

pub use error::ScanError;
pub use sector::{Classification, Msf, SectorFormat, SectorKind, SectorVerdict};
pub use tables::EccTables;

/// A reader that implements both Read and Seek.
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}
