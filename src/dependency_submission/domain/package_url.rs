use crate::shared::lenient;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Structured package identity as reported by component-detection.
///
/// Every field is optional on the wire. A record is only representable as a
/// purl when scheme, type and name are present and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageIdentity {
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(
        rename = "Type",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub package_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Sorted by key so the same identity always yields the same purl.
    #[serde(default, deserialize_with = "lenient::qualifiers", skip_serializing_if = "Option::is_none")]
    pub qualifiers: Option<BTreeMap<String, String>>,
}

impl PackageIdentity {
    pub fn new(scheme: &str, package_type: &str, name: &str) -> Self {
        Self {
            scheme: Some(scheme.to_string()),
            package_type: Some(package_type.to_string()),
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.namespace = Some(namespace.to_string());
        self
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn with_qualifier(mut self, key: &str, value: &str) -> Self {
        self.qualifiers
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Canonical purl for this identity, or `None` when scheme, type or name
    /// is missing.
    pub fn to_package_url(&self) -> Option<String> {
        let scheme = non_empty(&self.scheme)?;
        let package_type = non_empty(&self.package_type)?;
        let name = non_empty(&self.name)?;

        let mut purl = format!("{}:{}/", scheme, package_type);
        if let Some(namespace) = non_empty(&self.namespace) {
            purl.push_str(&escape_at(namespace));
            purl.push('/');
        }
        purl.push_str(&escape_at(name));
        if let Some(version) = non_empty(&self.version) {
            purl.push('@');
            purl.push_str(version);
        }
        if let Some(qualifiers) = self.qualifiers.as_ref().filter(|q| !q.is_empty()) {
            let rendered: Vec<String> = qualifiers
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect();
            purl.push('?');
            purl.push_str(&rendered.join("&"));
        }

        Some(purl)
    }
}

/// Builds the canonical purl for a scanner record.
///
/// Returns an empty string, the "unrepresentable" sentinel, for an absent
/// record or one without scheme, type or name. Never panics: a malformed
/// record must only cost that one component.
pub fn make_package_url(identity: Option<&PackageIdentity>) -> String {
    identity
        .and_then(PackageIdentity::to_package_url)
        .unwrap_or_default()
}

/// Parses a purl produced by [`make_package_url`] back into its identity.
///
/// The encoder escapes only `@` in namespace and name and writes versions
/// and qualifiers verbatim, so the round trip holds only for identities
/// whose version contains no `/` or `@`, whose qualifiers contain no `&`,
/// `=` or `?`, and whose namespace and name contain no literal `%40`.
/// Other identities still encode, but decode to a different identity.
pub fn parse_package_url(purl: &str) -> Option<PackageIdentity> {
    let (scheme, rest) = purl.split_once(':')?;
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    let mut segments: Vec<&str> = path.split('/').collect();
    if segments.len() < 2 {
        return None;
    }
    let package_type = segments.remove(0);
    let last = segments.pop()?;
    let (name, version) = match last.rsplit_once('@') {
        Some((name, version)) => (name, Some(version)),
        None => (last, None),
    };

    let identity = PackageIdentity {
        scheme: Some(scheme.to_string()),
        package_type: Some(package_type.to_string()),
        namespace: (!segments.is_empty()).then(|| unescape_at(&segments.join("/"))),
        name: Some(unescape_at(name)),
        version: version.map(str::to_string),
        qualifiers: query.map(parse_qualifiers),
    };

    identity.to_package_url().map(|_| identity)
}

fn parse_qualifiers(query: &str) -> BTreeMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn escape_at(value: &str) -> String {
    value.replace('@', "%40")
}

fn unescape_at(value: &str) -> String {
    value.replace("%40", "@")
}
