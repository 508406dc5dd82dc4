use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Whether a dependency is declared at the manifest or only pulled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Direct,
    Indirect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyScope {
    Runtime,
    Development,
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relationship::Direct => write!(f, "direct"),
            Relationship::Indirect => write!(f, "indirect"),
        }
    }
}

impl fmt::Display for DependencyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyScope::Runtime => write!(f, "runtime"),
            DependencyScope::Development => write!(f, "development"),
        }
    }
}

/// One resolved entry of a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDependency {
    pub package_url: String,
    pub relationship: Relationship,
    pub scope: DependencyScope,
    pub dependencies: Vec<String>,
}

/// Dependencies attributed to a single source file.
///
/// Each purl appears at most once. A direct classification wins over an
/// indirect one regardless of the order they arrive in.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    name: String,
    source_location: String,
    resolved: Vec<ResolvedDependency>,
    index: HashMap<String, usize>,
}

impl Manifest {
    pub fn new(name: impl Into<String>, source_location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_location: source_location.into(),
            resolved: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source_location(&self) -> &str {
        &self.source_location
    }

    pub fn add_direct_dependency(
        &mut self,
        package_url: &str,
        scope: DependencyScope,
        dependencies: &[String],
    ) {
        match self.index.get(package_url) {
            Some(&i) => {
                let existing = &mut self.resolved[i];
                existing.relationship = Relationship::Direct;
                existing.scope = scope;
                existing.dependencies = dependencies.to_vec();
            }
            None => self.insert(package_url, Relationship::Direct, scope, dependencies),
        }
    }

    /// Adds an indirect dependency. A package already present (direct or
    /// indirect) is left untouched.
    pub fn add_indirect_dependency(
        &mut self,
        package_url: &str,
        scope: DependencyScope,
        dependencies: &[String],
    ) {
        if !self.index.contains_key(package_url) {
            self.insert(package_url, Relationship::Indirect, scope, dependencies);
        }
    }

    fn insert(
        &mut self,
        package_url: &str,
        relationship: Relationship,
        scope: DependencyScope,
        dependencies: &[String],
    ) {
        self.index
            .insert(package_url.to_string(), self.resolved.len());
        self.resolved.push(ResolvedDependency {
            package_url: package_url.to_string(),
            relationship,
            scope,
            dependencies: dependencies.to_vec(),
        });
    }

    pub fn count_dependencies(&self) -> usize {
        self.resolved.len()
    }

    pub fn lookup_dependency(&self, package_url: &str) -> Option<&ResolvedDependency> {
        self.index.get(package_url).map(|&i| &self.resolved[i])
    }

    /// Resolved entries in insertion order.
    pub fn resolved(&self) -> &[ResolvedDependency] {
        &self.resolved
    }

    pub fn direct_dependencies(&self) -> impl Iterator<Item = &ResolvedDependency> {
        self.resolved
            .iter()
            .filter(|dep| dep.relationship == Relationship::Direct)
    }

    pub fn indirect_dependencies(&self) -> impl Iterator<Item = &ResolvedDependency> {
        self.resolved
            .iter()
            .filter(|dep| dep.relationship == Relationship::Indirect)
    }
}

struct ManifestFile<'a> {
    source_location: &'a str,
}

impl Serialize for ManifestFile<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ManifestFile", 1)?;
        state.serialize_field("source_location", self.source_location)?;
        state.end()
    }
}

struct ResolvedMap<'a>(&'a [ResolvedDependency]);

impl Serialize for ResolvedMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for dependency in self.0 {
            map.serialize_entry(&dependency.package_url, dependency)?;
        }
        map.end()
    }
}

/// Serializes in the dependency submission wire format:
/// `{ name, file: { source_location }, resolved: { <purl>: {...} } }`.
impl Serialize for Manifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Manifest", 3)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field(
            "file",
            &ManifestFile {
                source_location: &self.source_location,
            },
        )?;
        state.serialize_field("resolved", &ResolvedMap(&self.resolved))?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: &str = "pkg:npm/a@1.0.0";
    const B: &str = "pkg:npm/b@1.0.0";

    #[test]
    fn test_direct_upgrades_indirect() {
        let mut manifest = Manifest::new("package.json", "package.json");
        manifest.add_indirect_dependency(A, DependencyScope::Runtime, &[]);
        manifest.add_direct_dependency(A, DependencyScope::Runtime, &[B.to_string()]);

        assert_eq!(manifest.count_dependencies(), 1);
        let dep = manifest.lookup_dependency(A).unwrap();
        assert_eq!(dep.relationship, Relationship::Direct);
        assert_eq!(dep.dependencies, vec![B.to_string()]);
    }

    #[test]
    fn test_indirect_never_downgrades_direct() {
        let mut manifest = Manifest::new("package.json", "package.json");
        manifest.add_direct_dependency(A, DependencyScope::Runtime, &[]);
        manifest.add_indirect_dependency(A, DependencyScope::Development, &[]);

        let dep = manifest.lookup_dependency(A).unwrap();
        assert_eq!(dep.relationship, Relationship::Direct);
        assert_eq!(dep.scope, DependencyScope::Runtime);
        assert_eq!(manifest.direct_dependencies().count(), 1);
        assert_eq!(manifest.indirect_dependencies().count(), 0);
    }

    #[test]
    fn test_direct_and_indirect_partition() {
        let mut manifest = Manifest::new("package.json", "package.json");
        manifest.add_direct_dependency(A, DependencyScope::Runtime, &[]);
        manifest.add_indirect_dependency(B, DependencyScope::Development, &[]);

        assert_eq!(manifest.count_dependencies(), 2);
        let direct: Vec<&str> = manifest
            .direct_dependencies()
            .map(|d| d.package_url.as_str())
            .collect();
        let indirect: Vec<&str> = manifest
            .indirect_dependencies()
            .map(|d| d.package_url.as_str())
            .collect();
        assert_eq!(direct, vec![A]);
        assert_eq!(indirect, vec![B]);
    }

    #[test]
    fn test_serialize_wire_format() {
        let mut manifest = Manifest::new("nested/package.json", "nested/package.json");
        manifest.add_direct_dependency(A, DependencyScope::Runtime, &[B.to_string()]);
        manifest.add_indirect_dependency(B, DependencyScope::Development, &[]);

        let json = serde_json::to_value(&manifest).unwrap();

        assert_eq!(json["name"], "nested/package.json");
        assert_eq!(json["file"]["source_location"], "nested/package.json");
        assert_eq!(json["resolved"][A]["package_url"], A);
        assert_eq!(json["resolved"][A]["relationship"], "direct");
        assert_eq!(json["resolved"][A]["scope"], "runtime");
        assert_eq!(json["resolved"][A]["dependencies"][0], B);
        assert_eq!(json["resolved"][B]["relationship"], "indirect");
        assert_eq!(json["resolved"][B]["scope"], "development");
    }

    #[test]
    fn test_display_lowercase() {
        assert_eq!(Relationship::Indirect.to_string(), "indirect");
        assert_eq!(DependencyScope::Development.to_string(), "development");
    }
}
