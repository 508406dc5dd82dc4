use crate::dependency_submission::domain::Repository;
use crate::shared::Result;
use std::fmt;
use std::path::PathBuf;

/// CI host the binary is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    GitHubActions,
    AzureDevOps,
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformKind::GitHubActions => write!(f, "GitHub Actions"),
            PlatformKind::AzureDevOps => write!(f, "Azure DevOps"),
        }
    }
}

/// PlatformLogger port for user-facing log output
///
/// Implementations translate each level into the host platform's log
/// command syntax, so messages show up correctly in the job log.
pub trait PlatformLogger: Send + Sync {
    fn debug(&self, message: &str);

    fn info(&self, message: &str);

    fn warning(&self, message: &str);

    fn error(&self, message: &str);

    /// Reports the step as failed. The process exit code is set by the
    /// caller, not by the logger.
    fn set_failed(&self, message: &str);
}

impl<T: PlatformLogger + ?Sized> PlatformLogger for &T {
    fn debug(&self, message: &str) {
        (**self).debug(message)
    }

    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn warning(&self, message: &str) {
        (**self).warning(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }

    fn set_failed(&self, message: &str) {
        (**self).set_failed(message)
    }
}

/// InputProvider port for reading action/task inputs
pub trait InputProvider: Send + Sync {
    /// Trimmed input value; `None` when unset or blank.
    fn get_input(&self, name: &str) -> Option<String>;

    /// Boolean input following the YAML 1.2 core schema (`true`, `True`,
    /// `TRUE` and the `false` equivalents). Unset means `false`.
    ///
    /// # Errors
    /// Returns an error for any other value.
    fn get_boolean_input(&self, name: &str) -> Result<bool> {
        match self.get_input(name).as_deref() {
            None => Ok(false),
            Some("true" | "True" | "TRUE") => Ok(true),
            Some("false" | "False" | "FALSE") => Ok(false),
            Some(other) => Err(crate::shared::error::DetectionError::InvalidInput {
                name: name.to_string(),
                reason: format!(
                    "'{}' is not a boolean (expected true, True, TRUE, false, False or FALSE)",
                    other
                ),
            }
            .into()),
        }
    }
}

/// ContextProvider port exposing the CI run the binary is part of
pub trait ContextProvider: Send + Sync {
    /// Repository that receives the snapshot.
    ///
    /// # Errors
    /// Returns an error when the platform cannot name one.
    fn repository(&self) -> Result<Repository>;

    fn job_id(&self) -> String;

    fn run_id(&self) -> String;

    fn sha(&self) -> String;

    fn git_ref(&self) -> String;

    /// Checkout directory of the repository.
    fn workspace(&self) -> PathBuf;

    /// Base URL of the GitHub REST API the snapshot is submitted to.
    fn api_url(&self) -> String;
}

/// The full capability set a host platform provides.
pub trait PlatformProvider: PlatformLogger + InputProvider + ContextProvider {
    fn kind(&self) -> PlatformKind;
}
