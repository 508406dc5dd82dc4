//! component-detection-submission - dependency snapshots from component-detection scans
//!
//! This library runs [component-detection], translates its scan result into
//! per-manifest dependency lists and submits them to the GitHub dependency
//! submission API, following hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! [component-detection]: https://github.com/microsoft/component-detection
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_submission`): purl codec, package cache,
//!   manifest classification and path normalization
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): GitHub API, filesystem, process and CI platform
//!   implementations of the ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use component_detection_submission::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<()> {
//! let env = EnvironmentSnapshot::from_process();
//! let platform = GitHubActionsPlatform::new(env, PathBuf::from("."));
//!
//! let use_case = DetectComponentsUseCase::new(
//!     GitHubReleaseInstaller::new(None, false)?,
//!     ComponentDetectionRunner::new(),
//!     FileSystemReader::new(),
//!     &platform,
//! );
//!
//! let request = ScanRequest::new(".", PathBuf::from(".")).result_only();
//! let response = use_case.execute(request).await?;
//! for manifest in &response.manifests {
//!     println!("{}: {} dependencies", manifest.name(), manifest.count_dependencies());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_submission;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, SnapshotWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::network::{GitHubReleaseInstaller, GitHubSnapshotSubmitter};
    pub use crate::adapters::outbound::platform::{
        AzureDevOpsPlatform, EnvironmentSnapshot, GitHubActionsPlatform,
    };
    pub use crate::adapters::outbound::process::ComponentDetectionRunner;
    pub use crate::application::dto::{CondaRequest, ScanRequest, ScanResponse, SnapshotRequest};
    pub use crate::application::use_cases::{
        DetectComponentsUseCase, ParseCondaEnvironmentsUseCase, SubmitSnapshotUseCase,
    };
    pub use crate::config::ActionConfig;
    pub use crate::dependency_submission::domain::{
        make_package_url, parse_package_url, DependencyScope, Manifest, Package, PackageCache,
        PackageIdentity, Relationship, Snapshot,
    };
    pub use crate::dependency_submission::services::{ManifestBuilder, PathNormalizer};
    pub use crate::ports::outbound::{
        ContextProvider, EnvironmentFileReader, InputProvider, OutputPresenter, PlatformLogger,
        PlatformProvider, ScanResultReader, ScannerInstaller, ScannerRunner, SnapshotSubmitter,
    };
    pub use crate::shared::Result;
}
