/// Mock implementations for testing
mod mock_platform_logger;
mod mock_scan_result_reader;
mod mock_scanner;
mod mock_snapshot_submitter;

pub use mock_platform_logger::MockPlatformLogger;
pub use mock_scan_result_reader::MockScanResultReader;
pub use mock_scanner::{MockScannerInstaller, MockScannerRunner};
pub use mock_snapshot_submitter::MockSnapshotSubmitter;
