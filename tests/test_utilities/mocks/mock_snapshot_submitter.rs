use component_detection_submission::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock SnapshotSubmitter keeping every submitted snapshot
#[derive(Default, Clone)]
pub struct MockSnapshotSubmitter {
    pub submitted: Arc<Mutex<Vec<Snapshot>>>,
}

impl MockSnapshotSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submitted(&self) -> Vec<Snapshot> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SnapshotSubmitter for MockSnapshotSubmitter {
    async fn submit(&self, snapshot: &Snapshot) -> Result<()> {
        self.submitted.lock().unwrap().push(snapshot.clone());
        Ok(())
    }
}
