use std::path::PathBuf;

/// ScanRequest - Request DTO for the detect-components use case
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// `filePath` input as given: scanner source directory and the root
    /// dependency-graph keys are made relative to
    pub file_path: String,
    /// Directory relative paths are resolved against
    pub working_directory: PathBuf,
    /// Where the scanner writes (or already wrote) its result
    pub result_file: PathBuf,
    /// Location of the component-detection executable
    pub scanner_path: PathBuf,
    pub download_scanner: bool,
    pub run_scanner: bool,
    /// Extra scanner arguments, one argv entry each
    pub scanner_arguments: Vec<String>,
}

impl ScanRequest {
    pub fn new(file_path: impl Into<String>, working_directory: PathBuf) -> Self {
        Self {
            file_path: file_path.into(),
            working_directory,
            result_file: PathBuf::from(super::DEFAULT_RESULT_FILE),
            scanner_path: PathBuf::from(super::DEFAULT_SCANNER_PATH),
            download_scanner: true,
            run_scanner: true,
            scanner_arguments: Vec::new(),
        }
    }

    pub fn with_result_file(mut self, result_file: PathBuf) -> Self {
        self.result_file = result_file;
        self
    }

    pub fn with_scanner_path(mut self, scanner_path: PathBuf) -> Self {
        self.scanner_path = scanner_path;
        self
    }

    pub fn with_scanner_arguments(mut self, arguments: Vec<String>) -> Self {
        self.scanner_arguments = arguments;
        self
    }

    /// Skips both download and scan; only an existing result file is read.
    pub fn result_only(mut self) -> Self {
        self.download_scanner = false;
        self.run_scanner = false;
        self
    }
}
