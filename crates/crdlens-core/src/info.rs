//! Classification result for a detected CRD

use serde::{Deserialize, Serialize};

/// Placeholder used when a metadata field is absent from the document.
pub const UNKNOWN: &str = "Unknown";

/// Identifying metadata extracted from a CustomResourceDefinition document.
///
/// An immutable snapshot of one classification pass. It is recomputed fresh
/// on every detection request and has no identity beyond the call that
/// produced it; callers must not cache it across document edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrdInfo {
    /// The custom resource type name (`spec.names.kind`)
    pub kind: String,

    /// The API group (`spec.group`)
    pub group: String,

    /// The CRD object's own name (`metadata.name`)
    pub name: String,

    /// Declared versions, in document order
    pub versions: Vec<String>,

    /// Whether the document declared more than one version
    pub has_multiple_versions: bool,
}

impl CrdInfo {
    /// The first declared version, or `"Unknown"` when none are present.
    pub fn primary_version(&self) -> &str {
        self.versions.first().map(String::as_str).unwrap_or(UNKNOWN)
    }
}
