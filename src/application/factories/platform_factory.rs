use crate::adapters::outbound::platform::{
    AzureDevOpsPlatform, EnvironmentSnapshot, GitHubActionsPlatform,
};
use crate::ports::outbound::{PlatformKind, PlatformProvider};
use std::path::PathBuf;

/// Factory for the host platform provider
///
/// Detection looks only at the injected environment snapshot, so the
/// decision can be tested without touching the process environment.
pub struct PlatformFactory;

impl PlatformFactory {
    /// `GITHUB_ACTIONS=true` means GitHub Actions, `TF_BUILD=True` or a set
    /// `AGENT_NAME` means Azure DevOps. Anything else defaults to GitHub
    /// Actions.
    pub fn detect(env: &EnvironmentSnapshot) -> PlatformKind {
        if env.get("GITHUB_ACTIONS") == Some("true") {
            return PlatformKind::GitHubActions;
        }
        let tf_build = env
            .get("TF_BUILD")
            .is_some_and(|value| value.eq_ignore_ascii_case("true"));
        if tf_build || env.contains("AGENT_NAME") {
            return PlatformKind::AzureDevOps;
        }
        PlatformKind::GitHubActions
    }

    pub fn create(
        kind: PlatformKind,
        env: EnvironmentSnapshot,
        cwd: PathBuf,
    ) -> Box<dyn PlatformProvider> {
        match kind {
            PlatformKind::GitHubActions => Box::new(GitHubActionsPlatform::new(env, cwd)),
            PlatformKind::AzureDevOps => Box::new(AzureDevOpsPlatform::new(env, cwd)),
        }
    }
}
