//! Scan command - find CRD documents under a directory

use std::path::Path;

use console::style;
use crdlens_core::scan_root;

use crate::display::Reporter;
use crate::error::Result;

pub fn run(root: &Path, json: bool, reporter: Reporter) -> Result<()> {
    let detected = scan_root(root)?;

    if json {
        let entries: Vec<_> = detected
            .iter()
            .map(|d| {
                serde_json::json!({
                    "path": d.path.to_string_lossy(),
                    "kind": &d.info.kind,
                    "group": &d.info.group,
                    "name": &d.info.name,
                    "versions": &d.info.versions,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries).unwrap_or_default());
        return Ok(());
    }

    if detected.is_empty() {
        reporter.step(&format!("No CRD documents found under {}", root.display()));
        return Ok(());
    }

    for d in &detected {
        println!(
            "{} {} ({}/{})",
            style("✓").green(),
            d.path.display(),
            d.info.group,
            d.info.kind
        );
    }
    reporter.success(&format!("{} CRD document(s) found", detected.len()));

    Ok(())
}
