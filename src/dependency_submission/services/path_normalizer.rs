use crate::dependency_submission::domain::{DependencyGraphs, Diagnostic};
use std::collections::BTreeMap;
use std::path::Path;

/// Rewrites scanner-reported paths into repository-relative keys.
///
/// Everything here is lexical: no path is looked up on disk, so the scan
/// root does not have to exist on the machine doing the translation.
pub struct PathNormalizer;

/// A path split into an optional root (`/` or `C:/`) and clean components.
#[derive(Debug, PartialEq, Eq)]
struct LexicalPath {
    root: Option<String>,
    components: Vec<String>,
}

impl PathNormalizer {
    /// Re-keys `dependency_graphs` relative to the scan root.
    ///
    /// The scan root is `file_path_input` resolved against `cwd`. Absolute
    /// keys are made relative to it; relative keys are only cleaned, so
    /// running the normalizer twice is a no-op. Keys that turn out to name
    /// the same path are merged and reported with a warning.
    pub fn normalize(
        dependency_graphs: DependencyGraphs,
        file_path_input: &str,
        cwd: &Path,
    ) -> (DependencyGraphs, Vec<Diagnostic>) {
        let base = Self::scan_root(file_path_input, cwd);
        let mut normalized: DependencyGraphs = BTreeMap::new();
        let mut diagnostics = Vec::new();

        for (key, entry) in dependency_graphs {
            let path = LexicalPath::parse(&key);
            let relative = Self::relative_key(&path, &base);
            if path.root.as_deref() == Some("/") && base.root.as_deref().is_some_and(|r| r != "/") {
                diagnostics.push(Diagnostic::warning(format!(
                    "Dependency graph key '{}' has no drive letter and cannot be made relative to the scan root; using '{}'",
                    key, relative
                )));
            }
            match normalized.get_mut(&relative) {
                Some(existing) => {
                    diagnostics.push(Diagnostic::warning(format!(
                        "Dependency graph key '{}' resolves to '{}', which is already present; merging entries",
                        key, relative
                    )));
                    existing.merge(entry);
                }
                None => {
                    normalized.insert(relative, entry);
                }
            }
        }

        (normalized, diagnostics)
    }

    /// Normalizes one `locationsFoundAt` entry: backslashes become `/`,
    /// leading slashes are dropped and `.`/`..` segments are cleaned the same
    /// way graph keys are, so both sides name a file identically.
    ///
    /// A location that cleans to nothing yields an empty string.
    pub fn normalize_location(location: &str) -> String {
        let unified = location.replace('\\', "/");
        let path = LexicalPath::parse(unified.trim_start_matches('/'));
        if path.components.is_empty() {
            return String::new();
        }
        path.join()
    }

    fn scan_root(file_path_input: &str, cwd: &Path) -> LexicalPath {
        let input = LexicalPath::parse(file_path_input);
        if input.root.is_some() {
            return input;
        }

        let mut base = LexicalPath::parse(&cwd.to_string_lossy());
        for component in input.components {
            base.push(component);
        }
        base
    }

    fn relative_key(path: &LexicalPath, base: &LexicalPath) -> String {
        match path.root.as_deref() {
            None => path.join(),
            Some(root) if Some(root) == base.root.as_deref() => path.relative_to(base),
            // A different root cannot be expressed relative to the base.
            // Drive roots are kept so the key stays distinct; `/` is dropped.
            Some("/") => path.join(),
            Some(root) => format!("{}{}", root, path.join()),
        }
    }
}

impl LexicalPath {
    fn parse(raw: &str) -> Self {
        let unified = raw.replace('\\', "/");
        let (root, rest) = split_root(&unified);
        let mut path = Self {
            root,
            components: Vec::new(),
        };
        for part in rest.split('/') {
            path.push(part.to_string());
        }
        path
    }

    fn push(&mut self, part: String) {
        match part.as_str() {
            "" | "." => {}
            ".." => match self.components.last() {
                Some(last) if last != ".." => {
                    self.components.pop();
                }
                // `..` above a root stays at the root
                _ if self.root.is_some() => {}
                _ => self.components.push(part),
            },
            _ => self.components.push(part),
        }
    }

    fn join(&self) -> String {
        if self.components.is_empty() {
            ".".to_string()
        } else {
            self.components.join("/")
        }
    }

    fn relative_to(&self, base: &LexicalPath) -> String {
        let common = self
            .components
            .iter()
            .zip(&base.components)
            .take_while(|(a, b)| a == b)
            .count();

        let mut parts: Vec<String> = std::iter::repeat("..".to_string())
            .take(base.components.len() - common)
            .collect();
        parts.extend(self.components[common..].iter().cloned());

        Self {
            root: None,
            components: parts,
        }
        .join()
    }
}

fn split_root(path: &str) -> (Option<String>, &str) {
    let bytes = path.as_bytes();
    let is_drive = bytes.len() >= 2
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes.len() == 2 || bytes[2] == b'/');
    if is_drive {
        let drive = (bytes[0] as char).to_ascii_uppercase();
        return (Some(format!("{}:/", drive)), &path[2..]);
    }
    if let Some(rest) = path.strip_prefix('/') {
        return (Some("/".to_string()), rest);
    }
    (None, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_submission::domain::{DependencyGraphEntry, DiagnosticLevel};
    use std::path::PathBuf;

    fn entry(explicit: &str) -> DependencyGraphEntry {
        let mut entry = DependencyGraphEntry::default();
        entry
            .explicitly_referenced_component_ids
            .insert(explicit.to_string());
        entry
    }

    fn graphs(keys: &[&str]) -> DependencyGraphs {
        keys.iter()
            .map(|key| (key.to_string(), entry(key)))
            .collect()
    }

    fn cwd() -> PathBuf {
        PathBuf::from("/home/runner/work/app/app")
    }

    fn keys(graphs: &DependencyGraphs) -> Vec<&str> {
        graphs.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_absolute_keys_become_relative_to_scan_root() {
        let input = graphs(&[
            "/home/runner/work/app/app/package.json",
            "/home/runner/work/app/app/nested/package-lock.json",
        ]);

        let (normalized, diagnostics) = PathNormalizer::normalize(input, ".", &cwd());

        assert_eq!(keys(&normalized), vec!["nested/package-lock.json", "package.json"]);
        assert!(diagnostics.is_empty());
        assert!(normalized["package.json"]
            .is_explicitly_referenced("/home/runner/work/app/app/package.json"));
    }

    #[test]
    fn test_file_path_input_sets_scan_root() {
        let input = graphs(&["/home/runner/work/app/app/services/api/go.mod"]);

        let (normalized, _) = PathNormalizer::normalize(input, "services/api", &cwd());
        assert_eq!(keys(&normalized), vec!["go.mod"]);

        let input = graphs(&["/srv/code/Cargo.toml"]);
        let (normalized, _) = PathNormalizer::normalize(input, "/srv/code/", &cwd());
        assert_eq!(keys(&normalized), vec!["Cargo.toml"]);
    }

    #[test]
    fn test_keys_outside_scan_root_use_parent_segments() {
        let input = graphs(&["/home/runner/work/app/shared/package.json"]);
        let (normalized, _) = PathNormalizer::normalize(input, ".", &cwd());
        assert_eq!(keys(&normalized), vec!["../shared/package.json"]);
    }

    #[test]
    fn test_windows_keys() {
        let input = graphs(&["D:\\a\\repo\\repo\\src\\packages.config"]);
        let (normalized, _) =
            PathNormalizer::normalize(input, ".", Path::new("D:\\a\\repo\\repo"));
        assert_eq!(keys(&normalized), vec!["src/packages.config"]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let input = graphs(&[
            "/home/runner/work/app/app/package.json",
            "/home/runner/work/app/app/nested/package.json",
            "/home/runner/work/app/other/pom.xml",
        ]);

        let (once, _) = PathNormalizer::normalize(input, ".", &cwd());
        let (twice, diagnostics) = PathNormalizer::normalize(once.clone(), ".", &cwd());

        assert_eq!(once, twice);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_relative_keys_are_cleaned() {
        let input = graphs(&["./package.json", "nested\\package.json"]);
        let (normalized, _) = PathNormalizer::normalize(input, ".", &cwd());
        assert_eq!(keys(&normalized), vec!["nested/package.json", "package.json"]);
    }

    #[test]
    fn test_distinct_paths_never_collapse() {
        let input = graphs(&[
            "/home/runner/work/app/app/a/package.json",
            "/home/runner/work/app/app/b/package.json",
            "/home/runner/work/app/app/a/b/package.json",
        ]);
        let (normalized, diagnostics) = PathNormalizer::normalize(input, ".", &cwd());

        assert_eq!(normalized.len(), 3);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_lexically_equal_keys_are_merged_with_warning() {
        let input = graphs(&[
            "/home/runner/work/app/app/x/../package.json",
            "/home/runner/work/app/app/package.json",
        ]);
        let (normalized, diagnostics) = PathNormalizer::normalize(input, ".", &cwd());

        assert_eq!(keys(&normalized), vec!["package.json"]);
        let merged = &normalized["package.json"];
        assert!(merged.is_explicitly_referenced("/home/runner/work/app/app/x/../package.json"));
        assert!(merged.is_explicitly_referenced("/home/runner/work/app/app/package.json"));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].level(), DiagnosticLevel::Warning);
    }

    #[test]
    fn test_output_keys_never_start_with_slash() {
        let input = graphs(&["/etc/app/requirements.txt", "/home/runner/work/app/app/setup.py"]);
        let (normalized, _) = PathNormalizer::normalize(input, ".", &cwd());
        assert!(normalized.keys().all(|key| !key.starts_with('/')));
    }

    #[test]
    fn test_normalize_location() {
        assert_eq!(PathNormalizer::normalize_location("/package.json"), "package.json");
        assert_eq!(
            PathNormalizer::normalize_location("\\nested\\package.json"),
            "nested/package.json"
        );
        assert_eq!(
            PathNormalizer::normalize_location("nested/package.json"),
            "nested/package.json"
        );
        assert_eq!(PathNormalizer::normalize_location("/"), "");
    }

    #[test]
    fn test_normalize_location_cleans_dot_segments() {
        assert_eq!(PathNormalizer::normalize_location("/./package.json"), "package.json");
        assert_eq!(
            PathNormalizer::normalize_location("/nested/../package.json"),
            "package.json"
        );
        assert_eq!(
            PathNormalizer::normalize_location("\\a\\.\\b\\..\\go.mod"),
            "a/go.mod"
        );
        assert_eq!(
            PathNormalizer::normalize_location("../shared/package.json"),
            "../shared/package.json"
        );
    }

    #[test]
    fn test_location_and_graph_key_agree() {
        let input = graphs(&["/repo/./nested/../package.json"]);
        let (normalized, _) = PathNormalizer::normalize(input, ".", Path::new("/repo"));

        let location = PathNormalizer::normalize_location("/./package.json");
        assert!(normalized.contains_key(&location));
    }

    #[test]
    fn test_unrooted_key_on_drive_base_is_reported() {
        let input = graphs(&["/src/packages.config", "src/packages.config"]);
        let (normalized, diagnostics) =
            PathNormalizer::normalize(input, ".", Path::new("D:\\a\\repo"));

        assert_eq!(keys(&normalized), vec!["src/packages.config"]);
        assert!(diagnostics
            .iter()
            .any(|d| d.message().contains("has no drive letter")));
        assert!(diagnostics
            .iter()
            .any(|d| d.message().contains("merging entries")));
    }
}
