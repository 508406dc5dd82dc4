use crate::ports::outbound::OutputPresenter;
use crate::shared::error::DetectionError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing a snapshot to a file
///
/// This adapter implements the OutputPresenter port for `--output <file>`.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(DetectionError::FileWriteError {
                    path: self.output_path.clone(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Rejects an existing output path that is a symlink
    fn validate_output_security(&self) -> Result<()> {
        let Ok(metadata) = fs::symlink_metadata(&self.output_path) else {
            return Ok(());
        };

        if metadata.is_symlink() {
            return Err(DetectionError::FileWriteError {
                path: self.output_path.clone(),
                details: "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;
        self.validate_output_security()?;

        fs::write(&self.output_path, content).map_err(|e| DetectionError::FileWriteError {
            path: self.output_path.clone(),
            details: e.to_string(),
        })?;

        Ok(())
    }
}

/// Line written before a snapshot on stdout.
pub const SNAPSHOT_BEGIN_MARKER: &str = "----- BEGIN DEPENDENCY SNAPSHOT -----";
/// Line written after a snapshot on stdout.
pub const SNAPSHOT_END_MARKER: &str = "----- END DEPENDENCY SNAPSHOT -----";

/// StdoutPresenter adapter for writing a snapshot to stdout (`--output -`)
///
/// Platform log commands share stdout, so the snapshot is framed by
/// [`SNAPSHOT_BEGIN_MARKER`] and [`SNAPSHOT_END_MARKER`] lines; the text
/// between them is the JSON document.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }

    fn render(content: &str) -> String {
        format!(
            "{}\n{}\n{}\n",
            SNAPSHOT_BEGIN_MARKER, content, SNAPSHOT_END_MARKER
        )
    }
}

/// Cuts the snapshot document out of captured stdout.
pub fn extract_stdout_snapshot(output: &str) -> Option<&str> {
    let (_, rest) = output.split_once(SNAPSHOT_BEGIN_MARKER)?;
    let (snapshot, _) = rest.split_once(SNAPSHOT_END_MARKER)?;
    Some(snapshot.trim())
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(Self::render(content).as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
