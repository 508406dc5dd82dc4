use std::path::PathBuf;

pub const DEFAULT_ENVIRONMENT_PATTERN: &str = "**/environment.yml";

/// CondaRequest - Request DTO for the conda environment use case
#[derive(Debug, Clone)]
pub struct CondaRequest {
    /// Directory searched for environment files; manifest names are
    /// relative to it
    pub root: PathBuf,
    /// Glob matched against root-relative paths
    pub pattern: String,
}

impl CondaRequest {
    pub fn new(root: PathBuf, pattern: impl Into<String>) -> Self {
        Self {
            root,
            pattern: pattern.into(),
        }
    }
}
