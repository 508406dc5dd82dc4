use super::{EnvironmentSnapshot, DEFAULT_API_URL};
use crate::dependency_submission::domain::Repository;
use crate::ports::outbound::{
    ContextProvider, InputProvider, PlatformKind, PlatformLogger, PlatformProvider,
};
use crate::shared::error::DetectionError;
use crate::shared::Result;
use std::path::PathBuf;

/// Azure DevOps platform adapter
///
/// Task inputs arrive as `INPUT_*` variables. The GitHub repository that
/// receives the snapshot is not known to the pipeline, so it must be given
/// through the `githubRepository` input.
pub struct AzureDevOpsPlatform {
    env: EnvironmentSnapshot,
    cwd: PathBuf,
}

impl AzureDevOpsPlatform {
    pub fn new(env: EnvironmentSnapshot, cwd: PathBuf) -> Self {
        Self { env, cwd }
    }

    /// Environment variable holding an input: `-` becomes `_`, letters are
    /// upper-cased.
    pub fn input_variable(name: &str) -> String {
        format!("INPUT_{}", name.replace('-', "_").to_uppercase())
    }

    /// Prefixes every line of `message` with a logging command such as
    /// `##[warning]`, so multi-line messages keep their level.
    pub fn logging_command(command: &str, message: &str) -> String {
        message
            .lines()
            .map(|line| format!("##[{}]{}", command, line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn debug_enabled(&self) -> bool {
        self.env
            .get("SYSTEM_DEBUG")
            .is_some_and(|value| value.eq_ignore_ascii_case("true"))
    }
}

/// Escapes a value for use inside a `##vso[...]` command.
fn escape_property(message: &str) -> String {
    message
        .replace('%', "%AZP25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
        .replace(';', "%3B")
        .replace(']', "%5D")
}

impl PlatformLogger for AzureDevOpsPlatform {
    fn debug(&self, message: &str) {
        if self.debug_enabled() {
            println!("{}", Self::logging_command("debug", message));
        }
    }

    fn info(&self, message: &str) {
        println!("{}", message);
    }

    fn warning(&self, message: &str) {
        println!("{}", Self::logging_command("warning", message));
    }

    fn error(&self, message: &str) {
        println!("{}", Self::logging_command("error", message));
    }

    fn set_failed(&self, message: &str) {
        self.error(message);
        println!(
            "##vso[task.complete result=Failed;]{}",
            escape_property(message)
        );
    }
}

impl InputProvider for AzureDevOpsPlatform {
    fn get_input(&self, name: &str) -> Option<String> {
        let value = self.env.get_non_empty(&Self::input_variable(name));
        if value.is_none() && name == "token" {
            return self.env.get_non_empty("GITHUB_TOKEN");
        }
        value
    }
}

impl ContextProvider for AzureDevOpsPlatform {
    fn repository(&self) -> Result<Repository> {
        let value = self
            .get_input("githubRepository")
            .ok_or_else(|| DetectionError::MissingInput {
                name: "githubRepository".to_string(),
                hint: "Azure DevOps runs must name the GitHub repository that receives the snapshot, as owner/repo.".to_string(),
            })?;
        Repository::parse(&value).ok_or_else(|| {
            DetectionError::InvalidInput {
                name: "githubRepository".to_string(),
                reason: format!("'{}' is not in owner/repo form", value),
            }
            .into()
        })
    }

    fn job_id(&self) -> String {
        self.env
            .get_non_empty("AGENT_JOBNAME")
            .or_else(|| self.env.get_non_empty("SYSTEM_JOBNAME"))
            .unwrap_or_else(|| "unknown-job".to_string())
    }

    fn run_id(&self) -> String {
        self.env
            .get_non_empty("BUILD_BUILDID")
            .unwrap_or_else(|| "0".to_string())
    }

    fn sha(&self) -> String {
        self.env
            .get_non_empty("BUILD_SOURCEVERSION")
            .unwrap_or_default()
    }

    fn git_ref(&self) -> String {
        self.env
            .get_non_empty("BUILD_SOURCEBRANCH")
            .unwrap_or_else(|| "refs/heads/main".to_string())
    }

    fn workspace(&self) -> PathBuf {
        self.env
            .get_non_empty("BUILD_SOURCESDIRECTORY")
            .map(PathBuf::from)
            .unwrap_or_else(|| self.cwd.clone())
    }

    fn api_url(&self) -> String {
        self.env
            .get_non_empty("GITHUB_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }
}

impl PlatformProvider for AzureDevOpsPlatform {
    fn kind(&self) -> PlatformKind {
        PlatformKind::AzureDevOps
    }
}
