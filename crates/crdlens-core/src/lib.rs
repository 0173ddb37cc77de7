//! Crdlens Core - CRD detection for YAML documents
//!
//! This crate decides whether a YAML document is a Kubernetes
//! CustomResourceDefinition and extracts its identifying metadata:
//! - `CrdInfo`: the classification result (kind, group, name, versions)
//! - `classify`: the detection rules and metadata extraction
//! - `locate_lines`: textual location of `spec:`/`versions:` for editor lenses
//! - `scan`: directory-wide CRD discovery

pub mod detector;
pub mod error;
pub mod info;
pub mod scan;

pub use detector::{classify, classify_file, is_eligible_file, locate_lines, CrdLines};
pub use error::{CoreError, Result};
pub use info::CrdInfo;
pub use scan::{find_candidate_files, scan_files, scan_root, DetectedCrdFile};
