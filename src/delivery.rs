//! Delivery primitives
//!
//! This module contains the source validation check and the copy operation
//! that places the source file at the fixed destination path.

use std::path::{Path, PathBuf};

use fs_extra::file::{CopyOptions, copy};
use log::debug;

use crate::constants::{DESTINATION_DIR, DESTINATION_FILENAME};
use crate::errors::{Result, copy_failed_error, source_not_found_error};

/// Result of delivering a file
#[derive(Debug, Clone)]
pub struct DeliveryReceipt {
    /// The source path
    pub source_path: PathBuf,
    /// The destination path
    pub destination_path: PathBuf,
    /// Whether the delivery was simulated rather than written
    pub dry_run: bool,
}

/// Returns the fixed destination path `test2025-12-01/ToiDea.xml`
///
/// The destination is a contract with the receiving system: a fixed directory
/// that must already exist, and a fixed filename regardless of the source.
pub fn destination_path() -> PathBuf {
    Path::new(DESTINATION_DIR).join(DESTINATION_FILENAME)
}

/// Checks that the source path refers to a regular file
///
/// Directories, missing paths, and anything else that is not a regular file
/// are all rejected the same way.
///
/// # Errors
/// * Returns `SourceNotFound` if the path does not exist as a regular file
pub fn validate_source(source: &Path) -> Result<()> {
    if source.is_file() {
        Ok(())
    } else {
        Err(source_not_found_error(source.to_path_buf()))
    }
}

/// Copies the source file to the fixed destination path
///
/// An existing destination file is overwritten. The destination directory is
/// never created; a missing directory surfaces as a copy failure.
///
/// # Arguments
/// * `source` - The validated source path
/// * `run_execution` - Whether to actually write the destination file (true) or just simulate it (false)
///
/// # Returns
/// * `Result<DeliveryReceipt>` - The source and destination of the delivery or an error
///
/// # Errors
/// * Returns `CopyFailed` if the underlying copy operation fails
pub fn deliver_file(source: &Path, run_execution: bool) -> Result<DeliveryReceipt> {
    let destination = destination_path();

    if !run_execution {
        // Simulation mode, don't actually perform the copy
        debug!(
            "Simulating delivery: {} -> {}",
            source.display(),
            destination.display()
        );
        return Ok(DeliveryReceipt {
            source_path: source.to_path_buf(),
            destination_path: destination,
            dry_run: true,
        });
    }

    debug!(
        "Copying file: {} -> {}",
        source.display(),
        destination.display()
    );
    let options = CopyOptions::new().overwrite(true);
    copy(source, &destination, &options).map_err(|e| {
        copy_failed_error(
            std::io::Error::other(e),
            source.to_path_buf(),
            destination.clone(),
        )
    })?;

    Ok(DeliveryReceipt {
        source_path: source.to_path_buf(),
        destination_path: destination,
        dry_run: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_destination_path_is_fixed() {
        let destination = destination_path();
        assert_eq!(
            destination,
            Path::new("test2025-12-01").join("ToiDea.xml"),
            "Destination must always be the fixed directory and filename"
        );
    }

    #[test]
    fn test_validate_source_accepts_regular_file() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("report.txt");
        let mut file = File::create(&source).unwrap();
        writeln!(file, "hello").unwrap();

        assert!(validate_source(&source).is_ok());
    }

    #[test]
    fn test_validate_source_rejects_missing_path() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("does-not-exist-xyz");

        let result = validate_source(&source);
        assert!(result.is_err(), "A missing path must be rejected");

        let error_string = format!("{}", result.unwrap_err());
        assert!(
            error_string.contains("does not exist"),
            "Error message should state the file does not exist"
        );
    }

    #[test]
    fn test_validate_source_rejects_directory() {
        let dir = tempdir().unwrap();

        // A directory exists, but it is not a regular file
        let result = validate_source(dir.path());
        assert!(result.is_err(), "A directory must be rejected");
    }

    #[test]
    fn test_deliver_file_dry_run_writes_nothing() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("data.csv");
        File::create(&source).unwrap();

        let receipt = deliver_file(&source, false).unwrap();
        assert!(receipt.dry_run);
        assert_eq!(receipt.source_path, source);
        assert_eq!(receipt.destination_path, destination_path());
    }
}
