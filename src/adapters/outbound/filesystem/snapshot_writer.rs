use crate::dependency_submission::domain::Snapshot;
use crate::ports::outbound::{OutputPresenter, SnapshotSubmitter};
use crate::shared::Result;
use async_trait::async_trait;

/// SnapshotWriter adapter delivering a snapshot as pretty-printed JSON
///
/// Implements the SnapshotSubmitter port on top of an OutputPresenter, so
/// `--output` runs go through the same use case as real submissions.
pub struct SnapshotWriter {
    presenter: Box<dyn OutputPresenter>,
}

impl SnapshotWriter {
    pub fn new(presenter: Box<dyn OutputPresenter>) -> Self {
        Self { presenter }
    }
}

#[async_trait]
impl SnapshotSubmitter for SnapshotWriter {
    async fn submit(&self, snapshot: &Snapshot) -> Result<()> {
        let content = serde_json::to_string_pretty(snapshot)?;
        self.presenter.present(&content)
    }
}
