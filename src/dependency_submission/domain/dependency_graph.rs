use crate::shared::lenient;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Per-manifest dependency graph reported by component-detection.
///
/// All ids are scanner-assigned component ids (the `id` of a detected
/// component), not purls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyGraphEntry {
    /// component id -> ids it depends on; `None` marks a leaf
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub graph: BTreeMap<String, Option<Vec<String>>>,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub explicitly_referenced_component_ids: BTreeSet<String>,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub development_dependencies: BTreeSet<String>,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub dependencies: BTreeSet<String>,
}

/// Dependency graphs keyed by manifest path.
///
/// Keys come from the scanner as absolute paths and must be normalized to
/// repository-relative form before they are matched to manifest locations.
pub type DependencyGraphs = BTreeMap<String, DependencyGraphEntry>;

impl DependencyGraphEntry {
    /// Whether the component was declared directly in this manifest.
    pub fn is_explicitly_referenced(&self, component_id: &str) -> bool {
        self.explicitly_referenced_component_ids
            .contains(component_id)
    }

    /// Ids the given component depends on within this manifest.
    pub fn dependencies_of(&self, component_id: &str) -> &[String] {
        self.graph
            .get(component_id)
            .and_then(|deps| deps.as_deref())
            .unwrap_or(&[])
    }

    /// Folds another entry for the same manifest into this one.
    ///
    /// Used when two scanner keys turn out to name the same file, so that
    /// neither key's data is lost.
    pub fn merge(&mut self, other: DependencyGraphEntry) {
        for (id, deps) in other.graph {
            let slot = self.graph.entry(id).or_insert(None);
            if let Some(deps) = deps {
                let existing = slot.get_or_insert_with(Vec::new);
                for dep in deps {
                    if !existing.contains(&dep) {
                        existing.push(dep);
                    }
                }
            }
        }
        self.explicitly_referenced_component_ids
            .extend(other.explicitly_referenced_component_ids);
        self.development_dependencies
            .extend(other.development_dependencies);
        self.dependencies.extend(other.dependencies);
    }
}
