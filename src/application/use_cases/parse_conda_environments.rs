use crate::application::dto::CondaRequest;
use crate::dependency_submission::domain::{DiagnosticLevel, Manifest};
use crate::dependency_submission::services::CondaEnvironmentParser;
use crate::ports::outbound::{EnvironmentFileReader, PlatformLogger};
use crate::shared::Result;
use std::path::Path;

/// ParseCondaEnvironmentsUseCase - Builds manifests from conda environment files
///
/// # Type Parameters
/// * `R` - EnvironmentFileReader implementation
/// * `L` - PlatformLogger implementation
pub struct ParseCondaEnvironmentsUseCase<R, L> {
    reader: R,
    logger: L,
}

impl<R, L> ParseCondaEnvironmentsUseCase<R, L>
where
    R: EnvironmentFileReader,
    L: PlatformLogger,
{
    pub fn new(reader: R, logger: L) -> Self {
        Self { reader, logger }
    }

    /// Finds every environment file matching the request pattern and
    /// parses each into one manifest. A file that fails to parse aborts
    /// the run.
    pub fn execute(&self, request: CondaRequest) -> Result<Vec<Manifest>> {
        let files = self
            .reader
            .find_environment_files(&request.root, &request.pattern)?;

        if files.is_empty() {
            self.logger.warning(&format!(
                "No environment files matching '{}' found under {}",
                request.pattern,
                request.root.display()
            ));
            return Ok(Vec::new());
        }

        self.logger
            .info(&format!("🐍 Found {} environment file(s)", files.len()));

        let mut manifests = Vec::with_capacity(files.len());
        for file in files {
            let contents = self.reader.read_environment_file(&file)?;
            let name = Self::manifest_name(&request.root, &file);
            let outcome = CondaEnvironmentParser::parse(&contents, &name)?;

            for diagnostic in &outcome.diagnostics {
                match diagnostic.level() {
                    DiagnosticLevel::Debug => self.logger.debug(diagnostic.message()),
                    DiagnosticLevel::Warning => self.logger.warning(diagnostic.message()),
                }
            }
            self.logger.debug(&format!(
                "{}: {} dependencies",
                name,
                outcome.manifest.count_dependencies()
            ));
            manifests.push(outcome.manifest);
        }

        Ok(manifests)
    }

    /// Path of `file` relative to `root`, always with `/` separators.
    fn manifest_name(root: &Path, file: &Path) -> String {
        let relative = file.strip_prefix(root).unwrap_or(file);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}
