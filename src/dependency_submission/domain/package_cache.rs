use super::{make_package_url, Diagnostic, Package};
use crate::shared::error::DetectionError;
use crate::shared::Result;
use std::collections::HashMap;

/// Registry of packages keyed by canonical purl.
///
/// Insertion order is kept so manifests are emitted in the order the scanner
/// reported components. Deduplication is the caller's decision: check
/// [`PackageCache::has_package`] before [`PackageCache::add_package`].
#[derive(Debug, Default)]
pub struct PackageCache {
    packages: Vec<Package>,
    index: HashMap<String, usize>,
}

impl PackageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_package(&self, package_url: &str) -> bool {
        self.index.contains_key(package_url)
    }

    /// Adds a package; fails if its purl is already cached.
    pub fn add_package(&mut self, package: Package) -> Result<()> {
        if self.has_package(package.package_url()) {
            return Err(DetectionError::DuplicatePackage {
                purl: package.package_url().to_string(),
            }
            .into());
        }
        self.index
            .insert(package.package_url().to_string(), self.packages.len());
        self.packages.push(package);
        Ok(())
    }

    pub fn lookup_package(&self, package_url: &str) -> Option<&Package> {
        self.index.get(package_url).map(|&i| &self.packages[i])
    }

    pub fn lookup_package_mut(&mut self, package_url: &str) -> Option<&mut Package> {
        match self.index.get(package_url) {
            Some(&i) => self.packages.get_mut(i),
            None => None,
        }
    }

    /// Packages in insertion order.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Turns `topLevelReferrers` into dependency edges.
    ///
    /// Convention: a referrer depends on the package that lists it. For
    /// every package P and referrer R of P, `R.depends_on(P)` is recorded
    /// when R resolves to a cached package other than P. Invalid,
    /// unresolvable and self referrers produce no edge.
    pub fn resolve_referrers(&mut self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut edges: Vec<(String, String)> = Vec::new();

        for package in &self.packages {
            for referrer in package.top_level_referrers() {
                let Some(identity) = referrer.package_url.as_ref() else {
                    diagnostics.push(Diagnostic::debug(format!(
                        "Skipping referrer without packageUrl for component: {}",
                        package.id()
                    )));
                    continue;
                };

                let referrer_url = make_package_url(Some(identity));
                if referrer_url.is_empty() {
                    diagnostics.push(Diagnostic::debug(format!(
                        "Skipping referrer with invalid packageUrl for component: {}",
                        package.id()
                    )));
                    continue;
                }

                if referrer_url == package.package_url() {
                    diagnostics.push(Diagnostic::debug(format!(
                        "Skipping self-reference for package: {}",
                        package.id()
                    )));
                    continue;
                }

                if self.has_package(&referrer_url) {
                    edges.push((referrer_url, package.package_url().to_string()));
                }
            }
        }

        for (referrer_url, dependency_url) in edges {
            if let Some(referrer) = self.lookup_package_mut(&referrer_url) {
                referrer.depends_on(&dependency_url);
            }
        }

        diagnostics
    }
}
