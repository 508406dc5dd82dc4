/// Host platform adapters (GitHub Actions, Azure DevOps)
mod azure_devops;
mod environment;
mod github_actions;

pub use azure_devops::AzureDevOpsPlatform;
pub use environment::EnvironmentSnapshot;
pub use github_actions::{GitHubActionsPlatform, DEFAULT_API_URL};
