pub mod dependency_graph;
pub mod diagnostic;
pub mod manifest;
pub mod package;
pub mod package_cache;
pub mod package_url;
pub mod scan_result;
pub mod snapshot;

pub use dependency_graph::{DependencyGraphEntry, DependencyGraphs};
pub use diagnostic::{Diagnostic, DiagnosticLevel};
pub use manifest::{DependencyScope, Manifest, Relationship, ResolvedDependency};
pub use package::Package;
pub use package_cache::PackageCache;
pub use package_url::{make_package_url, parse_package_url, PackageIdentity};
pub use scan_result::{ComponentRecord, ComponentReference, DetectedComponent, ScanResult};
pub use snapshot::{Detector, Job, Repository, Snapshot};
