use component_detection_submission::ports::outbound::ScanInvocation;
use component_detection_submission::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock ScannerInstaller recording install destinations
#[derive(Default, Clone)]
pub struct MockScannerInstaller {
    pub destinations: Arc<Mutex<Vec<PathBuf>>>,
    pub should_fail: bool,
}

impl MockScannerInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }
}

#[async_trait::async_trait]
impl ScannerInstaller for MockScannerInstaller {
    async fn install(&self, destination: &Path) -> Result<()> {
        self.destinations
            .lock()
            .unwrap()
            .push(destination.to_path_buf());
        if self.should_fail {
            anyhow::bail!("Mock download failure");
        }
        Ok(())
    }
}

/// Mock ScannerRunner recording invocations
#[derive(Default, Clone)]
pub struct MockScannerRunner {
    pub invocations: Arc<Mutex<Vec<ScanInvocation>>>,
    pub should_fail: bool,
}

impl MockScannerRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }
}

#[async_trait::async_trait]
impl ScannerRunner for MockScannerRunner {
    async fn run(&self, invocation: &ScanInvocation) -> Result<()> {
        self.invocations.lock().unwrap().push(invocation.clone());
        if self.should_fail {
            anyhow::bail!("Mock scanner exited with status 1");
        }
        Ok(())
    }
}
