use crate::dependency_submission::domain::Snapshot;
use crate::shared::Result;
use async_trait::async_trait;

/// SnapshotSubmitter port for delivering a finished snapshot
///
/// The GitHub dependency submission API is the usual destination; writing
/// the snapshot to a file or stdout is the offline alternative.
#[async_trait]
pub trait SnapshotSubmitter: Send + Sync {
    /// Delivers the snapshot.
    ///
    /// # Errors
    /// Returns an error if the request fails or the destination rejects the
    /// snapshot.
    async fn submit(&self, snapshot: &Snapshot) -> Result<()>;
}

#[async_trait]
impl<T: SnapshotSubmitter + ?Sized> SnapshotSubmitter for Box<T> {
    async fn submit(&self, snapshot: &Snapshot) -> Result<()> {
        (**self).submit(snapshot).await
    }
}
