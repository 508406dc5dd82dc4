use crate::dependency_submission::domain::{Detector, Manifest};

/// SnapshotRequest - Request DTO for the submit-snapshot use case
#[derive(Debug)]
pub struct SnapshotRequest {
    pub manifests: Vec<Manifest>,
    pub detector: Detector,
    /// Groups snapshots from the same job; defaults to the job id
    pub correlator: String,
    /// Run id of the CI job
    pub job_id: String,
    pub sha: String,
    pub git_ref: String,
    /// `snapshot-sha` input, replaces `sha` when set
    pub sha_override: Option<String>,
    /// `snapshot-ref` input, replaces `git_ref` when set
    pub ref_override: Option<String>,
}
