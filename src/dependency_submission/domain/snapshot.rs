use super::Manifest;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

pub const DEFAULT_DETECTOR_NAME: &str = "Component Detection";
pub const DEFAULT_DETECTOR_VERSION: &str = "0.0.1";
pub const DEFAULT_DETECTOR_URL: &str =
    "https://github.com/advanced-security/component-detection-dependency-submission-action";

/// Tool that produced the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detector {
    pub name: String,
    pub version: String,
    pub url: String,
}

impl Default for Detector {
    fn default() -> Self {
        Self {
            name: DEFAULT_DETECTOR_NAME.to_string(),
            version: DEFAULT_DETECTOR_VERSION.to_string(),
            url: DEFAULT_DETECTOR_URL.to_string(),
        }
    }
}

/// CI job that produced the snapshot.
///
/// Snapshots with the same correlator replace each other on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Job {
    pub correlator: String,
    pub id: String,
}

/// GitHub repository a snapshot is submitted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub repo: String,
}

impl Repository {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Parses `owner/repo`. Both halves must be non-empty and there must be
    /// exactly one slash.
    pub fn parse(value: &str) -> Option<Self> {
        let (owner, repo) = value.trim().split_once('/')?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return None;
        }
        Some(Self::new(owner, repo))
    }
}

impl std::fmt::Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Dependency snapshot envelope submitted to the dependency graph.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    version: u32,
    job: Job,
    sha: String,
    #[serde(rename = "ref")]
    git_ref: String,
    detector: Detector,
    scanned: DateTime<Utc>,
    manifests: BTreeMap<String, Manifest>,
}

impl Snapshot {
    pub fn new(detector: Detector, job: Job, sha: impl Into<String>, git_ref: impl Into<String>) -> Self {
        Self {
            version: 0,
            job,
            sha: sha.into(),
            git_ref: git_ref.into(),
            detector,
            scanned: Utc::now(),
            manifests: BTreeMap::new(),
        }
    }

    pub fn with_scanned(mut self, scanned: DateTime<Utc>) -> Self {
        self.scanned = scanned;
        self
    }

    /// Adds a manifest keyed by its name. A manifest with the same name is
    /// replaced.
    pub fn add_manifest(&mut self, manifest: Manifest) {
        self.manifests.insert(manifest.name().to_string(), manifest);
    }

    pub fn set_sha(&mut self, sha: impl Into<String>) {
        self.sha = sha.into();
    }

    pub fn set_ref(&mut self, git_ref: impl Into<String>) {
        self.git_ref = git_ref.into();
    }

    pub fn sha(&self) -> &str {
        &self.sha
    }

    pub fn git_ref(&self) -> &str {
        &self.git_ref
    }

    pub fn job(&self) -> &Job {
        &self.job
    }

    pub fn detector(&self) -> &Detector {
        &self.detector
    }

    pub fn manifests(&self) -> &BTreeMap<String, Manifest> {
        &self.manifests
    }

    pub fn manifest_count(&self) -> usize {
        self.manifests.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_submission::domain::DependencyScope;
    use chrono::TimeZone;

    fn job() -> Job {
        Job {
            correlator: "build".to_string(),
            id: "42".to_string(),
        }
    }

    #[test]
    fn test_repository_parse() {
        assert_eq!(
            Repository::parse("octo-org/octo-repo"),
            Some(Repository::new("octo-org", "octo-repo"))
        );
        assert_eq!(Repository::parse("octo-org"), None);
        assert_eq!(Repository::parse("/repo"), None);
        assert_eq!(Repository::parse("owner/"), None);
        assert_eq!(Repository::parse("a/b/c"), None);
        assert_eq!(Repository::new("a", "b").to_string(), "a/b");
    }

    #[test]
    fn test_detector_defaults() {
        let detector = Detector::default();
        assert_eq!(detector.name, "Component Detection");
        assert_eq!(detector.version, "0.0.1");
        assert!(detector.url.ends_with("component-detection-dependency-submission-action"));
    }

    #[test]
    fn test_serialize_envelope() {
        let mut manifest = Manifest::new("package.json", "package.json");
        manifest.add_direct_dependency("pkg:npm/a@1.0.0", DependencyScope::Runtime, &[]);

        let scanned = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let mut snapshot = Snapshot::new(Detector::default(), job(), "abc123", "refs/heads/main")
            .with_scanned(scanned);
        snapshot.add_manifest(manifest);

        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["version"], 0);
        assert_eq!(json["job"]["correlator"], "build");
        assert_eq!(json["job"]["id"], "42");
        assert_eq!(json["sha"], "abc123");
        assert_eq!(json["ref"], "refs/heads/main");
        assert_eq!(json["detector"]["name"], "Component Detection");
        assert_eq!(json["scanned"], "2024-05-01T12:00:00Z");
        assert_eq!(
            json["manifests"]["package.json"]["resolved"]["pkg:npm/a@1.0.0"]["relationship"],
            "direct"
        );
    }

    #[test]
    fn test_overrides_replace_context_values() {
        let mut snapshot = Snapshot::new(Detector::default(), job(), "abc123", "refs/heads/main");
        snapshot.set_sha("def456");
        snapshot.set_ref("refs/pull/7/merge");

        assert_eq!(snapshot.sha(), "def456");
        assert_eq!(snapshot.git_ref(), "refs/pull/7/merge");
    }

    #[test]
    fn test_add_manifest_keys_by_name() {
        let mut snapshot = Snapshot::new(Detector::default(), job(), "abc", "refs/heads/main");
        snapshot.add_manifest(Manifest::new("a/package.json", "a/package.json"));
        snapshot.add_manifest(Manifest::new("b/package.json", "b/package.json"));
        snapshot.add_manifest(Manifest::new("a/package.json", "a/package.json"));

        assert_eq!(snapshot.manifest_count(), 2);
        assert!(snapshot.manifests().contains_key("b/package.json"));
    }
}
