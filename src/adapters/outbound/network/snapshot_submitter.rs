use crate::dependency_submission::domain::{Repository, Snapshot};
use crate::ports::outbound::SnapshotSubmitter;
use crate::shared::error::DetectionError;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

const API_VERSION: &str = "2022-11-28";

/// GitHubSnapshotSubmitter adapter for the dependency submission API
///
/// This adapter implements the SnapshotSubmitter port with a single
/// authenticated `POST /repos/{owner}/{repo}/dependency-graph/snapshots`.
/// Submissions are not retried: a rejected snapshot needs a human.
pub struct GitHubSnapshotSubmitter {
    client: reqwest::Client,
    api_url: String,
    repository: Repository,
    token: String,
}

impl GitHubSnapshotSubmitter {
    pub fn new(api_url: &str, repository: Repository, token: String) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("component-detection-submission/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            repository,
            token,
        })
    }

    /// Submission endpoint, with owner and repository name percent-encoded.
    pub fn snapshots_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/dependency-graph/snapshots",
            self.api_url,
            urlencoding::encode(&self.repository.owner),
            urlencoding::encode(&self.repository.repo)
        )
    }
}

#[async_trait]
impl SnapshotSubmitter for GitHubSnapshotSubmitter {
    async fn submit(&self, snapshot: &Snapshot) -> Result<()> {
        let response = self
            .client
            .post(self.snapshots_url())
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .json(snapshot)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DetectionError::SubmissionFailed {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshots_url() {
        let submitter = GitHubSnapshotSubmitter::new(
            "https://api.github.com",
            Repository::new("octo-org", "octo-repo"),
            "token".to_string(),
        )
        .unwrap();
        assert_eq!(
            submitter.snapshots_url(),
            "https://api.github.com/repos/octo-org/octo-repo/dependency-graph/snapshots"
        );
    }

    #[test]
    fn test_snapshots_url_ghes_with_trailing_slash() {
        let submitter = GitHubSnapshotSubmitter::new(
            "https://ghes.example.com/api/v3/",
            Repository::new("team", "my repo"),
            "token".to_string(),
        )
        .unwrap();
        assert_eq!(
            submitter.snapshots_url(),
            "https://ghes.example.com/api/v3/repos/team/my%20repo/dependency-graph/snapshots"
        );
    }
}
