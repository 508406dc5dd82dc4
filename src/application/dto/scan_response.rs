use crate::dependency_submission::domain::Manifest;

/// ScanResponse - Response DTO from the detect-components use case
#[derive(Debug)]
pub struct ScanResponse {
    /// Manifests in first-seen location order; empty means nothing to submit
    pub manifests: Vec<Manifest>,
    /// Number of entries in `componentsFound`
    pub component_count: usize,
}

impl ScanResponse {
    pub fn new(manifests: Vec<Manifest>, component_count: usize) -> Self {
        Self {
            manifests,
            component_count,
        }
    }
}
