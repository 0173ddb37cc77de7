//! Directory-wide CRD discovery
//!
//! Walks a root directory for YAML files and classifies each one. Files that
//! cannot be read or parsed are silently excluded; a workspace scan must not
//! fail because one file is unreadable.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::detector::{classify, is_eligible_file};
use crate::error::{CoreError, Result};
use crate::info::CrdInfo;

/// A positively classified file from a scan.
#[derive(Debug, Clone)]
pub struct DetectedCrdFile {
    /// Path the document was read from
    pub path: PathBuf,

    /// Its classification result
    pub info: CrdInfo,
}

/// Collect the YAML files under `root` that are eligible for detection.
///
/// Hidden directories and `node_modules` are skipped. Files are sorted for
/// deterministic ordering across platforms.
pub fn find_candidate_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(CoreError::PathNotFound {
            path: root.display().to_string(),
        });
    }

    let mut files = Vec::new();

    let walker = WalkDir::new(root).into_iter().filter_entry(|e| {
        let name = e.file_name().to_string_lossy();
        !(e.depth() > 0 && e.file_type().is_dir() && (name.starts_with('.') || name == "node_modules"))
    });

    for entry in walker.filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.is_file() && is_eligible_file(path) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Classify each candidate file, keeping the positives in input order.
pub fn scan_files<I>(paths: I) -> Vec<DetectedCrdFile>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut detected = Vec::new();

    for path in paths {
        let Ok(content) = std::fs::read_to_string(&path) else {
            continue;
        };

        if let Some(info) = classify(&content) {
            detected.push(DetectedCrdFile { path, info });
        }
    }

    detected
}

/// Walk `root` and return every document that classifies as a CRD.
pub fn scan_root(root: &Path) -> Result<Vec<DetectedCrdFile>> {
    Ok(scan_files(find_candidate_files(root)?))
}
