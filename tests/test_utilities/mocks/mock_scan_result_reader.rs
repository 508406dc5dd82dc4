use component_detection_submission::prelude::*;
use std::path::Path;

/// Mock ScanResultReader for testing
pub struct MockScanResultReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockScanResultReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl ScanResultReader for MockScanResultReader {
    fn read_scan_result(&self, _path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock scan result read failure");
        }
        Ok(self.content.clone())
    }
}
