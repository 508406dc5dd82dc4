use crate::application::dto::{ScanRequest, ScanResponse};
use crate::dependency_submission::domain::{Diagnostic, DiagnosticLevel, ScanResult};
use crate::dependency_submission::services::{ManifestBuilder, PathNormalizer};
use crate::ports::outbound::{
    PlatformLogger, ScanInvocation, ScanResultReader, ScannerInstaller, ScannerRunner,
};
use crate::shared::error::DetectionError;
use crate::shared::Result;

/// DetectComponentsUseCase - Core use case turning a scan into manifests
///
/// Sequences scanner download, scanner run, result loading, path
/// normalization and manifest building. Infrastructure is injected through
/// generics.
///
/// # Type Parameters
/// * `SI` - ScannerInstaller implementation
/// * `SR` - ScannerRunner implementation
/// * `RR` - ScanResultReader implementation
/// * `L` - PlatformLogger implementation
pub struct DetectComponentsUseCase<SI, SR, RR, L> {
    scanner_installer: SI,
    scanner_runner: SR,
    result_reader: RR,
    logger: L,
}

impl<SI, SR, RR, L> DetectComponentsUseCase<SI, SR, RR, L>
where
    SI: ScannerInstaller,
    SR: ScannerRunner,
    RR: ScanResultReader,
    L: PlatformLogger,
{
    /// Creates a new DetectComponentsUseCase with injected dependencies
    pub fn new(scanner_installer: SI, scanner_runner: SR, result_reader: RR, logger: L) -> Self {
        Self {
            scanner_installer,
            scanner_runner,
            result_reader,
            logger,
        }
    }

    /// Executes the detection use case
    ///
    /// Download and scanner failures are logged and do not abort: an
    /// existing binary or result file may still be usable. A result file
    /// that cannot be read or parsed is fatal.
    ///
    /// # Arguments
    /// * `request` - Scan request with paths and scanner options
    ///
    /// # Returns
    /// ScanResponse with the manifests; an empty list means there is
    /// nothing to submit
    pub async fn execute(&self, request: ScanRequest) -> Result<ScanResponse> {
        // Step 1: Install the scanner
        if request.download_scanner {
            self.install_scanner(&request).await;
        }

        // Step 2: Run the scanner
        if request.run_scanner {
            self.run_scanner(&request).await;
        }

        // Step 3: Load the scan result
        let scan_result = self.load_scan_result(&request)?;
        let component_count = scan_result.components_found.len();

        // Step 4: Normalize dependency graph keys
        let dependency_graphs = scan_result.dependency_graphs.map(|graphs| {
            let (normalized, diagnostics) =
                PathNormalizer::normalize(graphs, &request.file_path, &request.working_directory);
            self.forward(&diagnostics);
            normalized
        });
        if dependency_graphs.is_none() {
            self.logger.debug(
                "Scan result has no dependency graphs; classifying by top-level referrers",
            );
        }

        // Step 5: Build manifests
        let outcome = ManifestBuilder::build(scan_result.components_found, dependency_graphs.as_ref());
        self.forward(&outcome.diagnostics);

        self.logger.info(&format!(
            "✅ Created {} manifest(s) from {} component(s)",
            outcome.manifests.len(),
            component_count
        ));

        Ok(ScanResponse::new(outcome.manifests, component_count))
    }

    async fn install_scanner(&self, request: &ScanRequest) {
        self.logger.info(&format!(
            "⬇️  Downloading component-detection to {}",
            request.scanner_path.display()
        ));

        match self.scanner_installer.install(&request.scanner_path).await {
            Ok(()) => self.logger.info("✅ component-detection downloaded"),
            Err(e) => self.logger.error(&format!("{:#}", e)),
        }
    }

    async fn run_scanner(&self, request: &ScanRequest) {
        let invocation = ScanInvocation {
            scanner: request.scanner_path.clone(),
            source_directory: request.file_path.clone().into(),
            manifest_file: request.result_file.clone(),
            arguments: request.scanner_arguments.clone(),
        };

        self.logger.info(&format!(
            "🔍 Running {} {}",
            invocation.scanner.display(),
            invocation.to_argv().join(" ")
        ));

        match self.scanner_runner.run(&invocation).await {
            Ok(()) => self.logger.info("✅ component-detection scan complete"),
            Err(e) => self.logger.error(&format!("{:#}", e)),
        }
    }

    fn load_scan_result(&self, request: &ScanRequest) -> Result<ScanResult> {
        self.logger.info(&format!(
            "📖 Loading scan result from: {}",
            request.result_file.display()
        ));

        let content = self.result_reader.read_scan_result(&request.result_file)?;
        let scan_result: ScanResult =
            serde_json::from_str(&content).map_err(|e| DetectionError::ResultFileParseError {
                path: request.result_file.clone(),
                details: e.to_string(),
            })?;

        Ok(scan_result)
    }

    fn forward(&self, diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            match diagnostic.level() {
                DiagnosticLevel::Debug => self.logger.debug(diagnostic.message()),
                DiagnosticLevel::Warning => self.logger.warning(diagnostic.message()),
            }
        }
    }
}
