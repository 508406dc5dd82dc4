use super::{make_package_url, ComponentReference, DependencyScope, DetectedComponent};
use serde_json::Value;

/// Package entity built from one detected component.
///
/// Identity is the canonical purl. The remaining attributes are carried over
/// from the scanner record; `dependencies` holds the purls of the packages
/// this one depends on, filled in by the package cache.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    package_url: String,
    id: String,
    is_development_dependency: bool,
    top_level_referrers: Vec<ComponentReference>,
    locations_found_at: Vec<String>,
    container_detail_ids: Value,
    container_layer_ids: Value,
    dependencies: Vec<String>,
}

impl Package {
    pub fn new(package_url: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            package_url: package_url.into(),
            id: id.into(),
            is_development_dependency: false,
            top_level_referrers: Vec::new(),
            locations_found_at: Vec::new(),
            container_detail_ids: Value::Null,
            container_layer_ids: Value::Null,
            dependencies: Vec::new(),
        }
    }

    /// Builds the entity for a detected component whose purl has already
    /// been computed (and found non-empty) by the caller.
    pub fn from_detected(package_url: String, detected: DetectedComponent) -> Self {
        Self {
            package_url,
            id: detected.component.id,
            is_development_dependency: detected.is_development_dependency,
            top_level_referrers: detected.top_level_referrers.items,
            locations_found_at: detected.locations_found_at.items,
            container_detail_ids: detected.container_detail_ids,
            container_layer_ids: detected.container_layer_ids,
            dependencies: Vec::new(),
        }
    }

    pub fn package_url(&self) -> &str {
        &self.package_url
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_development_dependency(&self) -> bool {
        self.is_development_dependency
    }

    pub fn top_level_referrers(&self) -> &[ComponentReference] {
        &self.top_level_referrers
    }

    pub fn locations_found_at(&self) -> &[String] {
        &self.locations_found_at
    }

    pub fn container_detail_ids(&self) -> &Value {
        &self.container_detail_ids
    }

    pub fn container_layer_ids(&self) -> &Value {
        &self.container_layer_ids
    }

    /// Purls of the packages this package depends on.
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn scope(&self) -> DependencyScope {
        if self.is_development_dependency {
            DependencyScope::Development
        } else {
            DependencyScope::Runtime
        }
    }

    /// Records that this package depends on the package with `package_url`.
    ///
    /// Returns `false` (and records nothing) for a self edge or an edge that
    /// already exists.
    pub fn depends_on(&mut self, package_url: &str) -> bool {
        if package_url == self.package_url
            || self.dependencies.iter().any(|dep| dep == package_url)
        {
            return false;
        }
        self.dependencies.push(package_url.to_string());
        true
    }

    /// Whether any referrer other than the package itself was reported.
    ///
    /// Referrers without a usable purl still count: the scanner saw
    /// something pull this package in, even if it cannot be named.
    pub fn has_foreign_referrers(&self) -> bool {
        self.top_level_referrers.iter().any(|referrer| {
            make_package_url(referrer.package_url.as_ref()) != self.package_url
        })
    }
}
