use crate::ports::outbound::{ScanInvocation, ScannerRunner};
use crate::shared::error::DetectionError;
use crate::shared::Result;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// ComponentDetectionRunner adapter for running the scanner as a subprocess
///
/// The scanner's stdout and stderr are passed through so its own log ends
/// up in the job log.
pub struct ComponentDetectionRunner;

impl ComponentDetectionRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ComponentDetectionRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScannerRunner for ComponentDetectionRunner {
    async fn run(&self, invocation: &ScanInvocation) -> Result<()> {
        let status = Command::new(&invocation.scanner)
            .args(invocation.to_argv())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| DetectionError::ScannerFailed {
                details: format!("Failed to start {}: {}", invocation.scanner.display(), e),
            })?;

        if !status.success() {
            return Err(DetectionError::ScannerFailed {
                details: match status.code() {
                    Some(code) => format!("exited with status code {}", code),
                    None => "terminated by a signal".to_string(),
                },
            }
            .into());
        }

        Ok(())
    }
}
