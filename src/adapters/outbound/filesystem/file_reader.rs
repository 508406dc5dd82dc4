use crate::ports::outbound::{EnvironmentFileReader, ScanResultReader};
use crate::shared::error::DetectionError;
use crate::shared::security::safe_read_to_string;
use crate::shared::Result;
use globset::Glob;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements both ScanResultReader and EnvironmentFileReader
/// ports. Every read goes through the symlink and size checks in
/// `shared::security`.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanResultReader for FileSystemReader {
    fn read_scan_result(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(DetectionError::ResultFileNotFound {
                path: path.to_path_buf(),
                suggestion: "component-detection did not write a result file.\n   \
                     Check the scanner output above, or pass --result-file to point at an existing result."
                    .to_string(),
            }
            .into());
        }

        safe_read_to_string(path, "scan result").map_err(|e| {
            DetectionError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl EnvironmentFileReader for FileSystemReader {
    fn find_environment_files(&self, root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
        let matcher = Glob::new(pattern)
            .map_err(|e| DetectionError::InvalidInput {
                name: "filePattern".to_string(),
                reason: e.to_string(),
            })?
            .compile_matcher();

        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry
                    .path()
                    .strip_prefix(root)
                    .map(|relative| matcher.is_match(relative))
                    .unwrap_or(false)
            })
            .map(|entry| entry.into_path())
            .collect();

        files.sort();
        Ok(files)
    }

    fn read_environment_file(&self, path: &Path) -> Result<String> {
        safe_read_to_string(path, "environment file").map_err(|e| {
            DetectionError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
