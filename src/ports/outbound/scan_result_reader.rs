use crate::shared::Result;
use std::path::Path;

/// ScanResultReader port for reading the scanner's manifest file
///
/// This port abstracts the file system operations needed to read
/// the JSON written by `component-detection scan --ManifestFile`.
pub trait ScanResultReader: Send + Sync {
    /// Reads the raw scan result
    ///
    /// # Arguments
    /// * `path` - Path to the result file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    fn read_scan_result(&self, path: &Path) -> Result<String>;
}
