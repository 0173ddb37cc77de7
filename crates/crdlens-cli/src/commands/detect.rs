//! Detect command - classify a single file

use std::path::Path;

use crdlens_core::classify_file;

use crate::display::{print_crd_info, Reporter};
use crate::error::Result;
use crate::exit_codes;

pub fn run(file: &Path, json: bool, reporter: Reporter) -> Result<()> {
    let Some(info) = classify_file(file)? else {
        // A negative is a normal outcome, not an error report
        if json {
            println!("{}", serde_json::json!({ "isCRD": false }));
        } else {
            reporter.step(&format!("{} is not a CustomResourceDefinition", file.display()));
        }
        std::process::exit(exit_codes::DETECTION_NEGATIVE);
    };

    if json {
        let mut value = serde_json::to_value(&info).unwrap_or_default();
        value["isCRD"] = serde_json::Value::Bool(true);
        value["primaryVersion"] = serde_json::Value::String(info.primary_version().to_string());
        println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
    } else {
        print_crd_info(&info);
    }

    Ok(())
}
