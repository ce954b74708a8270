//! Streaming image scanner.
//!
//! Reads the image through a bounded queue, presenting each 2352-byte
//! window to the sector verifier in file order. The queue is compacted
//! before every refill, so peak memory stays constant regardless of image
//! size. Whole-image checksums are folded over each chunk as it is read.

use std::io::SeekFrom;

use disc_check_core::edc::edc_compute;
use disc_check_core::sector::{self, RAW_SECTOR_SIZE};
use disc_check_core::{EccTables, ReadSeek, ScanError};

use crate::report::ScanReport;

/// Default scan queue capacity (256 KiB).
pub const DEFAULT_QUEUE_CAPACITY: usize = 0x40000;

/// Options controlling a scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Queue capacity in bytes; must hold at least one raw sector.
    pub queue_capacity: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

/// Scan a whole image, classifying every 2352-byte window and verifying
/// the embedded EDC/ECC fields. Nothing is repaired; per-sector failures
/// are tallied and logged, and the scan always continues to the next
/// window.
///
/// The progress callback receives (bytes queued, total bytes) and fires
/// only when the megabyte bucket of the queued count changes, plus once
/// at completion.
pub fn scan_image(
    tables: &EccTables,
    reader: &mut dyn ReadSeek,
    options: &ScanOptions,
    progress: Option<&dyn Fn(u64, u64)>,
) -> Result<ScanReport, ScanError> {
    if options.queue_capacity < RAW_SECTOR_SIZE {
        return Err(ScanError::QueueTooSmall {
            capacity: options.queue_capacity,
            minimum: RAW_SECTOR_SIZE,
        });
    }

    let file_length = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(0))?;

    let mut queue = vec![0u8; options.queue_capacity];
    let mut start = 0usize; // logical start of the unconsumed tail
    let mut valid = 0usize; // valid bytes from `start`

    let mut report = ScanReport::new();
    let mut crc = crc32fast::Hasher::new();
    let mut image_edc = 0u32;
    let mut bytes_queued = 0u64;
    let mut last_bucket = u64::MAX; // first chunk always reports

    loop {
        // Refill when less than one sector is buffered and unqueued file
        // bytes remain. Compaction keeps start + valid within capacity.
        if valid < RAW_SECTOR_SIZE && bytes_queued < file_length {
            if start > 0 {
                queue.copy_within(start..start + valid, 0);
                start = 0;
            }
            let want = (file_length - bytes_queued).min((options.queue_capacity - valid) as u64)
                as usize;
            if want > 0 {
                if let Some(progress) = progress {
                    let bucket = bytes_queued >> 20;
                    if bucket != last_bucket {
                        last_bucket = bucket;
                        progress(bytes_queued, file_length);
                    }
                }
                let chunk = &mut queue[valid..valid + want];
                reader.read_exact(chunk)?;
                image_edc = edc_compute(tables, image_edc, chunk);
                crc.update(chunk);
                bytes_queued += want as u64;
                valid += want;
            }
        }

        if valid == 0 {
            break;
        }

        let window_len = valid.min(RAW_SECTOR_SIZE);
        let window = &queue[start..start + window_len];
        let verdict = sector::scan_sector(tables, window);
        if !verdict.intact {
            match verdict.address {
                Some(address) => log::warn!(
                    "{} sector with error at address {}",
                    verdict.kind.name(),
                    address
                ),
                None => log::warn!("{} sector with error", verdict.kind.name()),
            }
        }
        report.record(&verdict);
        report.bytes_scanned += window_len as u64;

        start += window_len;
        valid -= window_len;
    }

    if let Some(progress) = progress {
        progress(bytes_queued, file_length);
    }

    report.image_edc = image_edc;
    report.image_crc32 = crc.finalize();
    Ok(report)
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
