use super::EnvironmentSnapshot;
use crate::dependency_submission::domain::Repository;
use crate::ports::outbound::{
    ContextProvider, InputProvider, PlatformKind, PlatformLogger, PlatformProvider,
};
use crate::shared::error::DetectionError;
use crate::shared::Result;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub Actions platform adapter
///
/// Inputs come from `INPUT_*` variables, the run context from the
/// `GITHUB_*` variables, and log output is written as workflow commands.
pub struct GitHubActionsPlatform {
    env: EnvironmentSnapshot,
    cwd: PathBuf,
}

impl GitHubActionsPlatform {
    pub fn new(env: EnvironmentSnapshot, cwd: PathBuf) -> Self {
        Self { env, cwd }
    }

    /// Environment variable holding an input: spaces become `_`, letters
    /// are upper-cased, hyphens are kept.
    pub fn input_variable(name: &str) -> String {
        format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
    }

    /// Renders a workflow command such as `::warning::message`.
    pub fn workflow_command(command: &str, message: &str) -> String {
        format!("::{}::{}", command, escape_data(message))
    }
}

/// `%`, `\r` and `\n` would otherwise end or corrupt the command.
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

impl PlatformLogger for GitHubActionsPlatform {
    fn debug(&self, message: &str) {
        println!("{}", Self::workflow_command("debug", message));
    }

    fn info(&self, message: &str) {
        println!("{}", message);
    }

    fn warning(&self, message: &str) {
        println!("{}", Self::workflow_command("warning", message));
    }

    fn error(&self, message: &str) {
        println!("{}", Self::workflow_command("error", message));
    }

    fn set_failed(&self, message: &str) {
        self.error(message);
    }
}

impl InputProvider for GitHubActionsPlatform {
    fn get_input(&self, name: &str) -> Option<String> {
        self.env.get_non_empty(&Self::input_variable(name))
    }
}

impl ContextProvider for GitHubActionsPlatform {
    fn repository(&self) -> Result<Repository> {
        let value = self.env.get_non_empty("GITHUB_REPOSITORY").ok_or_else(|| {
            DetectionError::MissingInput {
                name: "GITHUB_REPOSITORY".to_string(),
                hint: "It is set by the GitHub Actions runner; run inside a workflow.".to_string(),
            }
        })?;
        Repository::parse(&value).ok_or_else(|| {
            DetectionError::InvalidInput {
                name: "GITHUB_REPOSITORY".to_string(),
                reason: format!("'{}' is not in owner/repo form", value),
            }
            .into()
        })
    }

    fn job_id(&self) -> String {
        self.env.get_non_empty("GITHUB_JOB").unwrap_or_default()
    }

    fn run_id(&self) -> String {
        self.env
            .get_non_empty("GITHUB_RUN_ID")
            .unwrap_or_else(|| "0".to_string())
    }

    fn sha(&self) -> String {
        self.env.get_non_empty("GITHUB_SHA").unwrap_or_default()
    }

    fn git_ref(&self) -> String {
        self.env.get_non_empty("GITHUB_REF").unwrap_or_default()
    }

    fn workspace(&self) -> PathBuf {
        self.env
            .get_non_empty("GITHUB_WORKSPACE")
            .map(PathBuf::from)
            .unwrap_or_else(|| self.cwd.clone())
    }

    fn api_url(&self) -> String {
        self.env
            .get_non_empty("GITHUB_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }
}

impl PlatformProvider for GitHubActionsPlatform {
    fn kind(&self) -> PlatformKind {
        PlatformKind::GitHubActions
    }
}
