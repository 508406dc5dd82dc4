use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// ScannerInstaller port for fetching the component-detection binary
#[async_trait]
pub trait ScannerInstaller: Send + Sync {
    /// Downloads the scanner and writes it, executable, to `destination`.
    ///
    /// # Errors
    /// Returns an error if the release cannot be found, the download fails,
    /// or the file cannot be written.
    async fn install(&self, destination: &Path) -> Result<()>;
}

/// One `component-detection scan` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanInvocation {
    pub scanner: PathBuf,
    pub source_directory: PathBuf,
    pub manifest_file: PathBuf,
    /// Extra scanner arguments, one argv entry each
    pub arguments: Vec<String>,
}

impl ScanInvocation {
    /// Full argument list passed to the scanner binary.
    pub fn to_argv(&self) -> Vec<String> {
        let mut argv = vec![
            "scan".to_string(),
            "--SourceDirectory".to_string(),
            self.source_directory.display().to_string(),
            "--ManifestFile".to_string(),
            self.manifest_file.display().to_string(),
        ];
        argv.extend(self.arguments.iter().cloned());
        argv
    }
}

/// ScannerRunner port for executing the scanner
#[async_trait]
pub trait ScannerRunner: Send + Sync {
    /// Runs the scanner to completion.
    ///
    /// # Errors
    /// Returns an error if the process cannot be started or exits non-zero.
    async fn run(&self, invocation: &ScanInvocation) -> Result<()>;
}
