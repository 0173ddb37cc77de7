//! CRD detection rules and metadata extraction
//!
//! Classification is a disjunction of three independent rules evaluated over
//! the parsed document tree: an explicit `kind`, an `apiextensions` API
//! group, or the structural shape of a CRD spec. Metadata extraction always
//! re-reads `spec`/`metadata`, regardless of which rule matched.
//!
//! Malformed YAML is a normal negative outcome, never an error: editors call
//! this on every keystroke over half-written documents.

use std::path::Path;

use serde_yaml::Value;

use crate::error::Result;
use crate::info::{CrdInfo, UNKNOWN};

/// Classify a raw YAML document, returning its CRD metadata on a match.
///
/// Returns `None` for anything that is not a CRD: malformed YAML, empty
/// documents, non-mapping roots, or mappings without CRD evidence.
pub fn classify(raw: &str) -> Option<CrdInfo> {
    let doc: Value = serde_yaml::from_str(raw).ok()?;

    if !doc.is_mapping() {
        return None;
    }

    let is_crd = matches_kind(&doc) || matches_api_group(&doc) || matches_structure(&doc);
    if !is_crd {
        return None;
    }

    Some(extract_info(&doc))
}

/// Classify a file on disk.
///
/// Read failures propagate; unparseable content is still just a negative.
pub fn classify_file(path: &Path) -> Result<Option<CrdInfo>> {
    let content = std::fs::read_to_string(path)?;
    Ok(classify(&content))
}

/// Top-level `kind` is the CustomResourceDefinition literal.
fn matches_kind(doc: &Value) -> bool {
    doc.get("kind").and_then(Value::as_str) == Some("CustomResourceDefinition")
}

/// Top-level `apiVersion` names the apiextensions API group.
fn matches_api_group(doc: &Value) -> bool {
    doc.get("apiVersion")
        .and_then(Value::as_str)
        .is_some_and(|v| v.contains("apiextensions"))
}

/// The document has the structural shape of a CRD spec: `names`, `group`,
/// and at least one declared version, independent of `kind`/`apiVersion`.
fn matches_structure(doc: &Value) -> bool {
    let Some(spec) = doc.get("spec") else {
        return false;
    };

    spec.get("names").is_some()
        && spec.get("group").is_some()
        && (spec.get("versions").is_some() || spec.get("version").is_some())
}

fn extract_info(doc: &Value) -> CrdInfo {
    let spec = doc.get("spec");

    let kind = spec
        .and_then(|s| s.get("names"))
        .and_then(|n| n.get("kind"))
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN)
        .to_string();

    let group = spec
        .and_then(|s| s.get("group"))
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN)
        .to_string();

    let name = doc
        .get("metadata")
        .and_then(|m| m.get("name"))
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN)
        .to_string();

    let (versions, has_multiple_versions) = extract_versions(spec);

    CrdInfo {
        kind,
        group,
        name,
        versions,
        has_multiple_versions,
    }
}

/// Extract declared versions in document order.
///
/// Prefers the `spec.versions` array form; each entry contributes its `name`
/// (or legacy `version`) field, and entries carrying neither are skipped.
/// Falls back to the single-scalar `spec.version` legacy form. Multiplicity
/// is judged on the raw array length, not the extracted identifiers.
fn extract_versions(spec: Option<&Value>) -> (Vec<String>, bool) {
    if let Some(entries) = spec.and_then(|s| s.get("versions")).and_then(Value::as_sequence) {
        let versions: Vec<String> = entries
            .iter()
            .filter_map(|v| v.get("name").or_else(|| v.get("version")))
            .filter_map(Value::as_str)
            .map(String::from)
            .collect();
        return (versions, entries.len() > 1);
    }

    if let Some(single) = spec.and_then(|s| s.get("version")).and_then(Value::as_str) {
        return (vec![single.to_string()], false);
    }

    (Vec::new(), false)
}

/// Line indexes of the structural anchors used for editor lens placement.
///
/// Indexes are zero-based; `-1` marks an anchor that was not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrdLines {
    /// First line starting with `spec:`
    pub spec_line: i64,

    /// Last line starting with `versions:` or `version:`
    pub versions_line: i64,
}

/// Locate the `spec:` and `versions:` anchors in raw document text.
///
/// This is a textual scan, independent of the structural parse, so it keeps
/// working on documents that fail to parse. Lines are matched after trimming
/// leading whitespace. The first `spec:` match wins; for `versions:` and
/// `version:` the scan runs forward and the final match wins.
pub fn locate_lines(raw: &str) -> CrdLines {
    let mut spec_line = -1;
    let mut versions_line = -1;

    for (idx, line) in raw.lines().enumerate() {
        let trimmed = line.trim_start();

        if spec_line < 0 && trimmed.starts_with("spec:") {
            spec_line = idx as i64;
        }

        if trimmed.starts_with("versions:") || trimmed.starts_with("version:") {
            versions_line = idx as i64;
        }
    }

    CrdLines {
        spec_line,
        versions_line,
    }
}

/// Whether a file is eligible for CRD detection by name alone.
///
/// Case-insensitive check for a `.yaml` or `.yml` suffix.
pub fn is_eligible_file(path: &Path) -> bool {
    let name = path.to_string_lossy().to_lowercase();
    name.ends_with(".yaml") || name.ends_with(".yml")
}
