use super::PathNormalizer;
use crate::dependency_submission::domain::{
    make_package_url, DependencyGraphEntry, DependencyGraphs, DetectedComponent, Diagnostic,
    Manifest, Package, PackageCache,
};
use std::collections::{HashMap, HashSet};

/// Result of one manifest build: manifests in first-seen location order plus
/// everything worth logging.
#[derive(Debug, Default)]
pub struct ManifestBuildOutcome {
    pub manifests: Vec<Manifest>,
    pub diagnostics: Vec<Diagnostic>,
}

/// ManifestBuilder service turning detected components into manifests
///
/// This service contains pure business logic: it has no I/O dependencies and
/// never fails. Malformed components are skipped and reported as
/// diagnostics.
pub struct ManifestBuilder;

impl ManifestBuilder {
    /// Builds one manifest per component location and classifies every
    /// package occurrence as direct or indirect.
    ///
    /// # Arguments
    /// * `components` - `componentsFound` from the scan result
    /// * `dependency_graphs` - Normalized dependency graphs, or `None` when
    ///   the scan result had none
    ///
    /// # Classification
    /// With dependency graphs, a package is direct at a location iff its
    /// scanner id is explicitly referenced by that location's graph entry.
    /// Without them, a package is direct iff nothing other than itself
    /// refers to it.
    pub fn build(
        components: Vec<DetectedComponent>,
        dependency_graphs: Option<&DependencyGraphs>,
    ) -> ManifestBuildOutcome {
        let mut diagnostics = Vec::new();

        let mut cache = Self::populate_cache(components, &mut diagnostics);
        diagnostics.extend(cache.resolve_referrers());

        let purls_by_id: HashMap<&str, &str> = cache
            .packages()
            .iter()
            .map(|package| (package.id(), package.package_url()))
            .collect();

        let mut manifests: Vec<Manifest> = Vec::new();
        let mut manifest_index: HashMap<String, usize> = HashMap::new();
        let mut missing_entries: HashSet<String> = HashSet::new();

        for package in cache.packages() {
            for raw_location in package.locations_found_at() {
                let location = PathNormalizer::normalize_location(raw_location);
                if location.is_empty() {
                    diagnostics.push(Diagnostic::debug(format!(
                        "Skipping empty location for package: {}",
                        package.package_url()
                    )));
                    continue;
                }

                let index = *manifest_index.entry(location.clone()).or_insert_with(|| {
                    manifests.push(Manifest::new(location.clone(), location.clone()));
                    manifests.len() - 1
                });
                let manifest = &mut manifests[index];

                match dependency_graphs {
                    Some(graphs) => match graphs.get(&location) {
                        Some(entry) => {
                            Self::classify_explicit(manifest, package, entry, &purls_by_id)
                        }
                        None => {
                            if missing_entries.insert(location.clone()) {
                                diagnostics.push(Diagnostic::warning(format!(
                                    "No dependency graph entry found for manifest location: {}",
                                    location
                                )));
                            }
                        }
                    },
                    None => Self::classify_by_referrers(manifest, package),
                }
            }
        }

        ManifestBuildOutcome {
            manifests,
            diagnostics,
        }
    }

    /// Builds the package cache, keeping the first component for each purl.
    fn populate_cache(
        components: Vec<DetectedComponent>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> PackageCache {
        let mut cache = PackageCache::new();

        for component in components {
            if component.skipped_entries() > 0 {
                diagnostics.push(Diagnostic::warning(format!(
                    "Ignoring {} malformed referrer/location entries of component: {}",
                    component.skipped_entries(),
                    component.component.id
                )));
            }

            let Some(identity) = component.component.package_url.as_ref() else {
                diagnostics.push(Diagnostic::debug(format!(
                    "Skipping component without packageUrl: {}",
                    component.component.id
                )));
                continue;
            };

            let package_url = make_package_url(Some(identity));
            if package_url.is_empty() {
                diagnostics.push(Diagnostic::debug(format!(
                    "Skipping component with invalid packageUrl: {}",
                    component.component.id
                )));
                continue;
            }

            if cache.has_package(&package_url) {
                diagnostics.push(Diagnostic::debug(format!(
                    "Duplicate package {} (component {}), keeping first occurrence",
                    package_url, component.component.id
                )));
                continue;
            }

            if let Err(e) = cache.add_package(Package::from_detected(package_url, component)) {
                diagnostics.push(Diagnostic::warning(e.to_string()));
            }
        }

        cache
    }

    fn classify_explicit(
        manifest: &mut Manifest,
        package: &Package,
        entry: &DependencyGraphEntry,
        purls_by_id: &HashMap<&str, &str>,
    ) {
        let dependencies = Self::dependencies_at(package, entry, purls_by_id);
        if entry.is_explicitly_referenced(package.id()) {
            manifest.add_direct_dependency(package.package_url(), package.scope(), &dependencies);
        } else {
            manifest.add_indirect_dependency(package.package_url(), package.scope(), &dependencies);
        }
    }

    fn classify_by_referrers(manifest: &mut Manifest, package: &Package) {
        if package.has_foreign_referrers() {
            manifest.add_indirect_dependency(
                package.package_url(),
                package.scope(),
                package.dependencies(),
            );
        } else {
            manifest.add_direct_dependency(
                package.package_url(),
                package.scope(),
                package.dependencies(),
            );
        }
    }

    /// Referrer edges plus the children the location's graph lists for the
    /// package, translated from scanner ids to purls.
    fn dependencies_at(
        package: &Package,
        entry: &DependencyGraphEntry,
        purls_by_id: &HashMap<&str, &str>,
    ) -> Vec<String> {
        let mut dependencies = package.dependencies().to_vec();
        for child_id in entry.dependencies_of(package.id()) {
            let Some(&child_url) = purls_by_id.get(child_id.as_str()) else {
                continue;
            };
            if child_url != package.package_url() && !dependencies.iter().any(|d| d == child_url) {
                dependencies.push(child_url.to_string());
            }
        }
        dependencies
    }
}
