use crate::dependency_submission::domain::{
    make_package_url, DependencyScope, Diagnostic, Manifest, PackageIdentity,
};
use crate::shared::error::DetectionError;
use crate::shared::Result;
use serde::Deserialize;
use std::path::PathBuf;

/// Outcome of parsing one environment file.
#[derive(Debug)]
pub struct CondaParseOutcome {
    pub manifest: Manifest,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Deserialize)]
struct EnvironmentFile {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    dependencies: Option<Vec<EnvironmentDependency>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EnvironmentDependency {
    Conda(String),
    Pip { pip: Vec<String> },
    Other(serde_yaml_ng::Value),
}

/// Turns a conda `environment.yml` into a manifest of direct dependencies.
///
/// Conda specs become `pkg:conda/...`, entries of the nested `pip:` list
/// become `pkg:pypi/...`. Only exact pins (`=`, `==`) produce a version;
/// range constraints are dropped.
pub struct CondaEnvironmentParser;

impl CondaEnvironmentParser {
    pub fn parse(contents: &str, manifest_name: &str) -> Result<CondaParseOutcome> {
        let document: Option<EnvironmentFile> = if contents.trim().is_empty() {
            None
        } else {
            serde_yaml_ng::from_str(contents).map_err(|e| {
                DetectionError::EnvironmentFileParseError {
                    path: PathBuf::from(manifest_name),
                    details: e.to_string(),
                }
            })?
        };

        let mut manifest = Manifest::new(manifest_name, manifest_name);
        let mut diagnostics = Vec::new();

        let Some(document) = document else {
            diagnostics.push(Diagnostic::warning(format!(
                "Environment file {} is empty",
                manifest_name
            )));
            return Ok(CondaParseOutcome {
                manifest,
                diagnostics,
            });
        };

        if let Some(name) = &document.name {
            diagnostics.push(Diagnostic::debug(format!(
                "Parsing environment '{}' from {}",
                name, manifest_name
            )));
        }

        for dependency in document.dependencies.unwrap_or_default() {
            match dependency {
                EnvironmentDependency::Conda(spec) => {
                    Self::add(&mut manifest, &mut diagnostics, "conda", Self::conda_spec(&spec), &spec)
                }
                EnvironmentDependency::Pip { pip } => {
                    for spec in pip {
                        Self::add(&mut manifest, &mut diagnostics, "pypi", Self::pip_spec(&spec), &spec);
                    }
                }
                EnvironmentDependency::Other(value) => diagnostics.push(Diagnostic::debug(format!(
                    "Skipping unsupported dependency entry in {}: {:?}",
                    manifest_name, value
                ))),
            }
        }

        Ok(CondaParseOutcome {
            manifest,
            diagnostics,
        })
    }

    fn add(
        manifest: &mut Manifest,
        diagnostics: &mut Vec<Diagnostic>,
        package_type: &str,
        parsed: Option<(String, Option<String>)>,
        raw: &str,
    ) {
        let Some((name, version)) = parsed else {
            diagnostics.push(Diagnostic::debug(format!(
                "Skipping unsupported {} dependency: {}",
                package_type, raw
            )));
            return;
        };

        let mut identity = PackageIdentity::new("pkg", package_type, &name);
        identity.version = version;
        let package_url = make_package_url(Some(&identity));
        if package_url.is_empty() {
            return;
        }
        manifest.add_direct_dependency(&package_url, DependencyScope::Runtime, &[]);
    }

    /// `[channel::]name[=version[=build]]`, `name==version` or
    /// `name<constraint>`.
    fn conda_spec(spec: &str) -> Option<(String, Option<String>)> {
        let spec = spec.trim();
        let spec = spec.rsplit_once("::").map_or(spec, |(_, rest)| rest).trim();
        Self::split_pinned(spec, |rest| {
            let pinned = rest.strip_prefix("==").or_else(|| rest.strip_prefix('='))?;
            pinned.split('=').next().map(str::to_string)
        })
    }

    /// `name[extras]==version` or `name<constraint>`. Pip options such as
    /// `-r requirements.txt` are not packages.
    fn pip_spec(spec: &str) -> Option<(String, Option<String>)> {
        let spec = spec.trim();
        if spec.starts_with('-') {
            return None;
        }
        let (name, version) = Self::split_pinned(spec, |rest| {
            rest.strip_prefix("==")
                .map(|version| version.split(';').next().unwrap_or(version).trim().to_string())
        })?;
        let name = name.split('[').next().unwrap_or(&name).trim().to_string();
        (!name.is_empty()).then_some((name, version))
    }

    fn split_pinned(
        spec: &str,
        version_of: impl Fn(&str) -> Option<String>,
    ) -> Option<(String, Option<String>)> {
        let boundary = spec
            .find(|c: char| matches!(c, '=' | '<' | '>' | '!' | '~' | ' ' | ';'))
            .unwrap_or(spec.len());
        let (name, rest) = spec.split_at(boundary);
        if name.is_empty() {
            return None;
        }
        let version = version_of(rest.trim_start()).filter(|v| !v.is_empty());
        Some((name.to_string(), version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_submission::domain::Relationship;

    const ENVIRONMENT: &str = r#"
name: data-science
channels:
  - conda-forge
dependencies:
  - python=3.11
  - numpy==1.26.4
  - conda-forge::pandas=2.2.1=py311h
  - scipy
  - matplotlib>=3.8
  - pip
  - pip:
      - requests==2.31.0
      - black
      - uvicorn[standard]==0.29.0
      - -r requirements.txt
"#;

    fn purls(outcome: &CondaParseOutcome) -> Vec<&str> {
        outcome
            .manifest
            .resolved()
            .iter()
            .map(|dep| dep.package_url.as_str())
            .collect()
    }

    #[test]
    fn test_parse_environment_file() {
        let outcome = CondaEnvironmentParser::parse(ENVIRONMENT, "envs/environment.yml").unwrap();

        assert_eq!(outcome.manifest.name(), "envs/environment.yml");
        assert_eq!(outcome.manifest.source_location(), "envs/environment.yml");
        assert_eq!(
            purls(&outcome),
            vec![
                "pkg:conda/python@3.11",
                "pkg:conda/numpy@1.26.4",
                "pkg:conda/pandas@2.2.1",
                "pkg:conda/scipy",
                "pkg:conda/matplotlib",
                "pkg:conda/pip",
                "pkg:pypi/requests@2.31.0",
                "pkg:pypi/black",
                "pkg:pypi/uvicorn@0.29.0",
            ]
        );
    }

    #[test]
    fn test_all_dependencies_are_direct_runtime() {
        let outcome = CondaEnvironmentParser::parse(ENVIRONMENT, "environment.yml").unwrap();
        assert!(outcome.manifest.resolved().iter().all(|dep| {
            dep.relationship == Relationship::Direct && dep.scope == DependencyScope::Runtime
        }));
    }

    #[test]
    fn test_pip_options_are_skipped_with_diagnostic() {
        let outcome = CondaEnvironmentParser::parse(ENVIRONMENT, "environment.yml").unwrap();
        assert!(outcome
            .diagnostics
            .iter()
            .any(|d| d.message().contains("-r requirements.txt")));
    }

    #[test]
    fn test_missing_dependencies_yields_empty_manifest() {
        let outcome = CondaEnvironmentParser::parse("name: empty\n", "environment.yml").unwrap();
        assert_eq!(outcome.manifest.count_dependencies(), 0);

        let outcome = CondaEnvironmentParser::parse("", "environment.yml").unwrap();
        assert_eq!(outcome.manifest.count_dependencies(), 0);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let result = CondaEnvironmentParser::parse("dependencies: [unclosed", "environment.yml");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse environment file"));
    }

    #[test]
    fn test_conda_spec_forms() {
        assert_eq!(
            CondaEnvironmentParser::conda_spec("defaults::openssl==3.0.13"),
            Some(("openssl".to_string(), Some("3.0.13".to_string())))
        );
        assert_eq!(
            CondaEnvironmentParser::conda_spec("zlib"),
            Some(("zlib".to_string(), None))
        );
        assert_eq!(CondaEnvironmentParser::conda_spec("  "), None);
    }
}
