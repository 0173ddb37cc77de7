//! Lines command - anchor lines for editor lens placement

use std::path::Path;

use crdlens_core::locate_lines;

use crate::error::Result;

pub fn run(file: &Path, json: bool) -> Result<()> {
    let raw = std::fs::read_to_string(file)?;
    let lines = locate_lines(&raw);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "specLine": lines.spec_line,
                "versionsLine": lines.versions_line,
            })
        );
    } else {
        println!("spec: {}", lines.spec_line);
        println!("versions: {}", lines.versions_line);
    }

    Ok(())
}
