use crate::application::dto::SnapshotRequest;
use crate::dependency_submission::domain::{Job, Snapshot};
use crate::ports::outbound::{PlatformLogger, SnapshotSubmitter};
use crate::shared::Result;

/// SubmitSnapshotUseCase - Wraps manifests in a snapshot and delivers it
///
/// # Type Parameters
/// * `S` - SnapshotSubmitter implementation
/// * `L` - PlatformLogger implementation
pub struct SubmitSnapshotUseCase<S, L> {
    submitter: S,
    logger: L,
}

impl<S, L> SubmitSnapshotUseCase<S, L>
where
    S: SnapshotSubmitter,
    L: PlatformLogger,
{
    pub fn new(submitter: S, logger: L) -> Self {
        Self { submitter, logger }
    }

    /// Assembles and submits the snapshot.
    ///
    /// # Returns
    /// The submitted snapshot, or `None` when there were no manifests and
    /// submission was skipped
    pub async fn execute(&self, request: SnapshotRequest) -> Result<Option<Snapshot>> {
        if request.manifests.is_empty() {
            self.logger
                .warning("No manifests were produced; skipping snapshot submission");
            return Ok(None);
        }

        let job = Job {
            correlator: request.correlator,
            id: request.job_id,
        };
        let mut snapshot = Snapshot::new(request.detector, job, request.sha, request.git_ref);
        if let Some(sha) = request.sha_override {
            snapshot.set_sha(sha);
        }
        if let Some(git_ref) = request.ref_override {
            snapshot.set_ref(git_ref);
        }
        for manifest in request.manifests {
            snapshot.add_manifest(manifest);
        }

        self.logger.info(&format!(
            "📤 Submitting snapshot with {} manifest(s) for {} ({})",
            snapshot.manifest_count(),
            snapshot.sha(),
            snapshot.git_ref()
        ));

        self.submitter.submit(&snapshot).await?;

        self.logger.info("✅ Snapshot submitted");
        Ok(Some(snapshot))
    }
}
