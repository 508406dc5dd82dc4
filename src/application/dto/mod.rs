/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod conda_request;
mod scan_request;
mod scan_response;
mod snapshot_request;

pub use conda_request::{CondaRequest, DEFAULT_ENVIRONMENT_PATTERN};
pub use scan_request::ScanRequest;
pub use scan_response::ScanResponse;
pub use snapshot_request::SnapshotRequest;

/// Result file the scanner is told to write.
pub const DEFAULT_RESULT_FILE: &str = "./output.json";

/// Where the downloaded scanner is written.
#[cfg(windows)]
pub const DEFAULT_SCANNER_PATH: &str = "./component-detection.exe";
#[cfg(not(windows))]
pub const DEFAULT_SCANNER_PATH: &str = "./component-detection";
