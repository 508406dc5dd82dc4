/// Network adapters for GitHub API calls
mod release_installer;
mod snapshot_submitter;

pub use release_installer::GitHubReleaseInstaller;
pub use snapshot_submitter::GitHubSnapshotSubmitter;
