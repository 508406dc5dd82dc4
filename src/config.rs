//! Action input support for component-detection-submission.
//!
//! Inputs come from the host platform (`INPUT_*` variables) and are read
//! once into a typed [`ActionConfig`], validated before any scanning starts.

use crate::application::dto::DEFAULT_ENVIRONMENT_PATTERN;
use crate::dependency_submission::domain::{Detector, Repository};
use crate::ports::outbound::{InputProvider, PlatformKind};
use crate::shared::error::DetectionError;
use crate::shared::Result;

const DEFAULT_FILE_PATH: &str = ".";

/// Scanner parameters passed through to `component-detection scan`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannerOptions {
    pub directory_exclusion_list: Option<String>,
    pub detector_args: Option<String>,
    pub detectors_filter: Option<String>,
    pub detector_categories: Option<String>,
    pub docker_images_to_scan: Option<String>,
}

impl ScannerOptions {
    /// Extra scanner arguments, flag and value as separate entries. Unset
    /// options produce nothing.
    pub fn to_arguments(&self) -> Vec<String> {
        let options = [
            ("--DirectoryExclusionList", &self.directory_exclusion_list),
            ("--DetectorArgs", &self.detector_args),
            ("--DetectorsFilter", &self.detectors_filter),
            ("--DetectorCategories", &self.detector_categories),
            ("--DockerImagesToScan", &self.docker_images_to_scan),
        ];

        options
            .into_iter()
            .filter_map(|(flag, value)| value.as_ref().map(|value| (flag, value)))
            .flat_map(|(flag, value)| [flag.to_string(), value.clone()])
            .collect()
    }
}

/// Typed view of every action input.
#[derive(Debug, Clone)]
pub struct ActionConfig {
    pub file_path: String,
    pub file_pattern: String,
    pub scanner: ScannerOptions,
    pub correlator: Option<String>,
    pub detector: Detector,
    pub snapshot_sha: Option<String>,
    pub snapshot_ref: Option<String>,
    pub token: Option<String>,
    pub github_repository: Option<Repository>,
    /// Reuse an existing scanner executable instead of downloading one.
    pub skip_download: bool,
    /// Read an existing result file instead of running the scanner.
    pub skip_scan: bool,
}

impl ActionConfig {
    /// Reads and validates all inputs.
    ///
    /// # Errors
    /// - detector name, version and url are not all set or all unset
    /// - `githubRepository` is not in `owner/repo` form
    /// - `skipDownload` or `skipScan` is not a boolean
    /// - on Azure DevOps, `githubRepository` or `token` is missing
    pub fn from_inputs<I>(inputs: &I, platform: PlatformKind) -> Result<Self>
    where
        I: InputProvider + ?Sized,
    {
        let scanner = ScannerOptions {
            directory_exclusion_list: inputs.get_input("directoryExclusionList"),
            detector_args: inputs.get_input("detectorArgs"),
            detectors_filter: inputs.get_input("detectorsFilter"),
            detector_categories: inputs.get_input("detectorsCategories"),
            docker_images_to_scan: inputs.get_input("dockerImagesToScan"),
        };

        let github_repository = inputs
            .get_input("githubRepository")
            .map(|value| {
                Repository::parse(&value).ok_or_else(|| DetectionError::InvalidInput {
                    name: "githubRepository".to_string(),
                    reason: format!("'{}' is not in 'owner/repo' format", value),
                })
            })
            .transpose()?;

        let config = Self {
            file_path: inputs
                .get_input("filePath")
                .unwrap_or_else(|| DEFAULT_FILE_PATH.to_string()),
            file_pattern: inputs
                .get_input("filePattern")
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT_PATTERN.to_string()),
            scanner,
            correlator: inputs.get_input("correlator"),
            detector: read_detector(inputs)?,
            snapshot_sha: inputs.get_input("snapshot-sha"),
            snapshot_ref: inputs.get_input("snapshot-ref"),
            token: inputs.get_input("token"),
            github_repository,
            skip_download: inputs.get_boolean_input("skipDownload")?,
            skip_scan: inputs.get_boolean_input("skipScan")?,
        };

        validate_config(&config, platform)?;
        Ok(config)
    }
}

fn read_detector<I>(inputs: &I) -> Result<Detector>
where
    I: InputProvider + ?Sized,
{
    let name = inputs.get_input("detector-name");
    let version = inputs.get_input("detector-version");
    let url = inputs.get_input("detector-url");

    match (name, version, url) {
        (None, None, None) => Ok(Detector::default()),
        (Some(name), Some(version), Some(url)) => Ok(Detector { name, version, url }),
        _ => Err(DetectionError::Validation {
            message: "detector-name, detector-version and detector-url must be set together.\n\n\
                      💡 Hint: Set all three inputs or none of them to use the defaults."
                .to_string(),
        }
        .into()),
    }
}

/// Validate platform-specific requirements.
fn validate_config(config: &ActionConfig, platform: PlatformKind) -> Result<()> {
    if platform != PlatformKind::AzureDevOps {
        return Ok(());
    }

    if config.github_repository.is_none() {
        return Err(DetectionError::MissingInput {
            name: "githubRepository".to_string(),
            hint: "Please provide the GitHub repository in format 'owner/repo'".to_string(),
        }
        .into());
    }
    if config.token.is_none() {
        return Err(DetectionError::MissingInput {
            name: "token".to_string(),
            hint: "Please provide a GitHub token with contents:write permission".to_string(),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapInputs(HashMap<&'static str, &'static str>);

    impl MapInputs {
        fn new(pairs: &[(&'static str, &'static str)]) -> Self {
            Self(pairs.iter().copied().collect())
        }
    }

    impl InputProvider for MapInputs {
        fn get_input(&self, name: &str) -> Option<String> {
            self.0
                .get(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        }
    }

    #[test]
    fn test_defaults() {
        let config =
            ActionConfig::from_inputs(&MapInputs::new(&[]), PlatformKind::GitHubActions).unwrap();

        assert_eq!(config.file_path, ".");
        assert_eq!(config.file_pattern, "**/environment.yml");
        assert_eq!(config.detector, Detector::default());
        assert!(config.scanner.to_arguments().is_empty());
        assert!(config.correlator.is_none());
        assert!(config.github_repository.is_none());
        assert!(!config.skip_download);
        assert!(!config.skip_scan);
    }

    #[test]
    fn test_skip_inputs_are_booleans() {
        let inputs = MapInputs::new(&[("skipDownload", "True"), ("skipScan", "false")]);
        let config = ActionConfig::from_inputs(&inputs, PlatformKind::GitHubActions).unwrap();
        assert!(config.skip_download);
        assert!(!config.skip_scan);

        let inputs = MapInputs::new(&[("skipScan", "yes")]);
        let err = ActionConfig::from_inputs(&inputs, PlatformKind::GitHubActions)
            .unwrap_err()
            .to_string();
        assert!(err.contains("skipScan"));
        assert!(err.contains("not a boolean"));
    }

    #[test]
    fn test_scanner_arguments_in_fixed_order() {
        let inputs = MapInputs::new(&[
            ("dockerImagesToScan", "alpine:3.19"),
            ("detectorsFilter", "Npm,Pip"),
            ("directoryExclusionList", "**/test/**"),
        ]);

        let config = ActionConfig::from_inputs(&inputs, PlatformKind::GitHubActions).unwrap();

        assert_eq!(
            config.scanner.to_arguments(),
            vec![
                "--DirectoryExclusionList",
                "**/test/**",
                "--DetectorsFilter",
                "Npm,Pip",
                "--DockerImagesToScan",
                "alpine:3.19",
            ]
        );
    }

    #[test]
    fn test_blank_scanner_option_is_omitted() {
        let inputs = MapInputs::new(&[("detectorArgs", "   "), ("detectorsCategories", "Python")]);

        let config = ActionConfig::from_inputs(&inputs, PlatformKind::GitHubActions).unwrap();

        assert_eq!(
            config.scanner.to_arguments(),
            vec!["--DetectorCategories", "Python"]
        );
    }

    #[test]
    fn test_custom_detector() {
        let inputs = MapInputs::new(&[
            ("detector-name", "custom"),
            ("detector-version", "2.0.0"),
            ("detector-url", "https://example.com/custom"),
        ]);

        let config = ActionConfig::from_inputs(&inputs, PlatformKind::GitHubActions).unwrap();

        assert_eq!(config.detector.name, "custom");
        assert_eq!(config.detector.version, "2.0.0");
        assert_eq!(config.detector.url, "https://example.com/custom");
    }

    #[test]
    fn test_partial_detector_is_rejected() {
        let inputs = MapInputs::new(&[("detector-name", "custom")]);

        let result = ActionConfig::from_inputs(&inputs, PlatformKind::GitHubActions);

        let err = result.unwrap_err().to_string();
        assert!(err.contains("must be set together"));
    }

    #[test]
    fn test_snapshot_overrides() {
        let inputs = MapInputs::new(&[("snapshot-sha", "def456"), ("snapshot-ref", "refs/tags/v1")]);

        let config = ActionConfig::from_inputs(&inputs, PlatformKind::GitHubActions).unwrap();

        assert_eq!(config.snapshot_sha.as_deref(), Some("def456"));
        assert_eq!(config.snapshot_ref.as_deref(), Some("refs/tags/v1"));
    }

    #[test]
    fn test_azure_devops_requires_repository_and_token() {
        let missing_repo = MapInputs::new(&[("token", "ghp_x")]);
        let err = ActionConfig::from_inputs(&missing_repo, PlatformKind::AzureDevOps)
            .unwrap_err()
            .to_string();
        assert!(err.contains("githubRepository input is required"));

        let missing_token = MapInputs::new(&[("githubRepository", "octo/app")]);
        let err = ActionConfig::from_inputs(&missing_token, PlatformKind::AzureDevOps)
            .unwrap_err()
            .to_string();
        assert!(err.contains("token input is required"));

        let complete = MapInputs::new(&[("githubRepository", "octo/app"), ("token", "ghp_x")]);
        let config = ActionConfig::from_inputs(&complete, PlatformKind::AzureDevOps).unwrap();
        assert_eq!(config.github_repository, Some(Repository::new("octo", "app")));
    }

    #[test]
    fn test_malformed_repository_is_rejected() {
        let inputs = MapInputs::new(&[("githubRepository", "octo-app")]);

        let err = ActionConfig::from_inputs(&inputs, PlatformKind::GitHubActions)
            .unwrap_err()
            .to_string();

        assert!(err.contains("githubRepository"));
        assert!(err.contains("owner/repo"));
    }
}
