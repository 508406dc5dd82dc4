use super::{DependencyGraphs, PackageIdentity};
use crate::shared::lenient;
use serde::Deserialize;
use serde_json::Value;

/// Top-level shape of the component-detection manifest file (`output.json`).
///
/// Only the fields the translation needs are modelled; the rest of the
/// document (detectors, source directory, ...) is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub components_found: Vec<DetectedComponent>,
    /// `None` when the scanner wrote no dependency graphs at all, which
    /// selects the referrer-based classification.
    #[serde(default)]
    pub dependency_graphs: Option<DependencyGraphs>,
}

/// One entry of `componentsFound`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedComponent {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub component: ComponentRecord,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_development_dependency: bool,
    #[serde(default)]
    pub top_level_referrers: lenient::List<ComponentReference>,
    #[serde(default)]
    pub locations_found_at: lenient::List<String>,
    #[serde(default)]
    pub container_detail_ids: Value,
    #[serde(default)]
    pub container_layer_ids: Value,
}

/// The `component` object of a detected component.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    #[serde(default, deserialize_with = "lenient::object")]
    pub package_url: Option<PackageIdentity>,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient::string")]
    pub component_type: Option<String>,
}

/// A reference to another component, as found in `topLevelReferrers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentReference {
    #[serde(default, deserialize_with = "lenient::object")]
    pub package_url: Option<PackageIdentity>,
}

impl ComponentReference {
    pub fn new(package_url: PackageIdentity) -> Self {
        Self {
            package_url: Some(package_url),
        }
    }
}

impl DetectedComponent {
    /// Convenience constructor used when building components in code.
    pub fn new(id: &str, package_url: PackageIdentity) -> Self {
        Self {
            component: ComponentRecord {
                package_url: Some(package_url),
                id: id.to_string(),
                ..ComponentRecord::default()
            },
            ..Self::default()
        }
    }

    pub fn with_locations(mut self, locations: &[&str]) -> Self {
        self.locations_found_at = locations
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .into();
        self
    }

    pub fn with_referrers(mut self, referrers: Vec<PackageIdentity>) -> Self {
        self.top_level_referrers = referrers
            .into_iter()
            .map(ComponentReference::new)
            .collect::<Vec<_>>()
            .into();
        self
    }

    /// Referrer and location entries dropped because they were malformed.
    pub fn skipped_entries(&self) -> usize {
        self.top_level_referrers.skipped + self.locations_found_at.skipped
    }

    pub fn as_development_dependency(mut self) -> Self {
        self.is_development_dependency = true;
        self
    }
}
