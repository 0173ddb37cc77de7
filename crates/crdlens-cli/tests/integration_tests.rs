//! Integration tests for CLI commands

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

const CRD: &str = "\
apiVersion: apiextensions.k8s.io/v1
kind: CustomResourceDefinition
metadata:
  name: certificates.cert-manager.io
spec:
  group: cert-manager.io
  versions:
    - name: v1
    - name: v1beta1
  names:
    kind: Certificate
    plural: certificates
";

/// Helper to run crdlens with config/data dirs pinned inside `home`
fn crdlens(home: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_crdlens"))
        .args(args)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env("HOME", home)
        .output()
        .expect("Failed to execute crdlens")
}

fn write_crd(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("certificate-crd.yaml");
    fs::write(&path, CRD).unwrap();
    path
}

mod detect_command {
    use super::*;

    #[test]
    fn test_detect_positive() {
        let home = TempDir::new().unwrap();
        let crd = write_crd(home.path());

        let output = crdlens(home.path(), &["detect", crd.to_str().unwrap()]);

        assert!(output.status.success(), "Expected success for a CRD file");
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Certificate"));
        assert!(stdout.contains("cert-manager.io"));
    }

    #[test]
    fn test_detect_json() {
        let home = TempDir::new().unwrap();
        let crd = write_crd(home.path());

        let output = crdlens(home.path(), &["detect", crd.to_str().unwrap(), "--json"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        // The welcome notice may precede the JSON; parse from the first brace
        let json_start = stdout.find('{').expect("JSON object in output");
        let json: serde_json::Value =
            serde_json::from_str(&stdout[json_start..]).expect("Output should be valid JSON");

        assert_eq!(json["isCRD"], true);
        assert_eq!(json["kind"], "Certificate");
        assert_eq!(json["group"], "cert-manager.io");
        assert_eq!(json["primaryVersion"], "v1");
        assert_eq!(json["hasMultipleVersions"], true);
        assert_eq!(json["versions"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_detect_negative_exit_code() {
        let home = TempDir::new().unwrap();
        let path = home.path().join("deploy.yaml");
        fs::write(&path, "kind: Deployment\nmetadata:\n  name: web\n").unwrap();

        let output = crdlens(home.path(), &["detect", path.to_str().unwrap()]);

        assert_eq!(output.status.code(), Some(2));
        // A negative is not an error report
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!stderr.contains("Error"), "Got: {}", stderr);
    }

    #[test]
    fn test_detect_malformed_is_negative_not_a_crash() {
        let home = TempDir::new().unwrap();
        let path = home.path().join("broken.yaml");
        fs::write(&path, "kind: [unclosed").unwrap();

        let output = crdlens(home.path(), &["detect", path.to_str().unwrap()]);
        assert_eq!(output.status.code(), Some(2));
    }

    #[test]
    fn test_detect_missing_file_is_io_error() {
        let home = TempDir::new().unwrap();
        let output = crdlens(home.path(), &["detect", "/nonexistent/crd.yaml"]);
        assert_eq!(output.status.code(), Some(7));
    }
}

mod lines_command {
    use super::*;

    #[test]
    fn test_lines_json() {
        let home = TempDir::new().unwrap();
        let path = home.path().join("crd.yaml");
        fs::write(
            &path,
            "\
apiVersion: apiextensions.k8s.io/v1
kind: CustomResourceDefinition
metadata:
  name: examples.example.com
spec:
  group: example.com
  versions:
    - name: v1
",
        )
        .unwrap();

        let output = crdlens(home.path(), &["lines", path.to_str().unwrap(), "--json"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        let json_start = stdout.find('{').unwrap();
        let json: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();

        assert_eq!(json["specLine"], 4);
        assert_eq!(json["versionsLine"], 6);
    }

    #[test]
    fn test_lines_absent_anchors() {
        let home = TempDir::new().unwrap();
        let path = home.path().join("plain.yaml");
        fs::write(&path, "kind: ConfigMap\ndata: {}\n").unwrap();

        let output = crdlens(home.path(), &["lines", path.to_str().unwrap(), "--json"]);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let json_start = stdout.find('{').unwrap();
        let json: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();

        assert_eq!(json["specLine"], -1);
        assert_eq!(json["versionsLine"], -1);
    }
}

mod scan_command {
    use super::*;

    #[test]
    fn test_scan_lists_crds_only() {
        let home = TempDir::new().unwrap();
        let root = home.path().join("workspace");
        fs::create_dir_all(&root).unwrap();
        write_crd(&root);
        fs::write(root.join("deploy.yaml"), "kind: Deployment\n").unwrap();

        let output = crdlens(home.path(), &["scan", root.to_str().unwrap(), "--json"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        let json_start = stdout.find('[').unwrap();
        let json: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();

        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["kind"], "Certificate");
    }
}

mod validate_command {
    use super::*;

    #[test]
    fn test_validate_is_a_stub_reporting_valid() {
        let home = TempDir::new().unwrap();
        let crd = write_crd(home.path());
        let sample = home.path().join("sample.yaml");
        fs::write(&sample, "kind: Certificate\n").unwrap();

        let output = crdlens(
            home.path(),
            &[
                "validate",
                sample.to_str().unwrap(),
                crd.to_str().unwrap(),
                "--json",
            ],
        );

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        let json_start = stdout.find('{').unwrap();
        let json: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();

        assert_eq!(json["valid"], true);
        assert_eq!(json["errors"].as_array().unwrap().len(), 0);
    }
}

#[cfg(unix)]
mod generate_command {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// Install a stub generator script and a config file pointing at it
    fn stub_tool(home: &Path, script_body: &str) -> std::path::PathBuf {
        let tool = home.join("cty");
        fs::write(&tool, format!("#!/bin/sh\n{}\n", script_body)).unwrap();
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();

        let config = home.join("config.yaml");
        fs::write(
            &config,
            format!("ctyPath: {}\n", tool.to_str().unwrap()),
        )
        .unwrap();
        config
    }

    const WRITING_STUB: &str = r#"
if [ "$1" = "version" ]; then exit 0; fi
out=""
prev=""
for a in "$@"; do
  if [ "$prev" = "--output" ]; then out="$a"; fi
  prev="$a"
done
if [ -n "$out" ]; then
  printf 'kind: Certificate\n' > "$out/Certificate_sample.yaml"
else
  printf 'kind: Certificate\n'
fi
"#;

    #[test]
    fn test_generate_end_to_end() {
        let home = TempDir::new().unwrap();
        let config = stub_tool(home.path(), WRITING_STUB);
        let crd = write_crd(home.path());

        let output = crdlens(
            home.path(),
            &[
                "generate",
                crd.to_str().unwrap(),
                "--minimal",
                "--config",
                config.to_str().unwrap(),
            ],
        );

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(output.status.success(), "stderr: {}", stderr);

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Certificate_sample.yaml"));

        // Default policy resolves to the source file's directory
        let sample = home.path().join("Certificate_sample.yaml");
        assert!(sample.exists());
    }

    #[test]
    fn test_generate_stdout_variant() {
        let home = TempDir::new().unwrap();
        let config = stub_tool(home.path(), WRITING_STUB);
        let crd = write_crd(home.path());

        let output = crdlens(
            home.path(),
            &[
                "--quiet",
                "generate",
                crd.to_str().unwrap(),
                "--stdout",
                "--config",
                config.to_str().unwrap(),
            ],
        );

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(stdout, "kind: Certificate\n");
    }

    #[test]
    fn test_generate_fallback_search_finds_renamed_sample() {
        let home = TempDir::new().unwrap();
        // Writes under a name that misses the prediction but matches the
        // sample substring search
        let stub = r#"
if [ "$1" = "version" ]; then exit 0; fi
out=""
prev=""
for a in "$@"; do
  if [ "$prev" = "--output" ]; then out="$a"; fi
  prev="$a"
done
printf 'kind: Certificate\n' > "$out/certificates.sample.yaml"
"#;
        let config = stub_tool(home.path(), stub);
        let crd = write_crd(home.path());

        let output = crdlens(
            home.path(),
            &[
                "generate",
                crd.to_str().unwrap(),
                "--config",
                config.to_str().unwrap(),
            ],
        );

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("certificates.sample.yaml"));
    }

    #[test]
    fn test_generate_surfaces_tool_stderr() {
        let home = TempDir::new().unwrap();
        let stub = r#"
if [ "$1" = "version" ]; then exit 0; fi
echo 'schema error' >&2
exit 1
"#;
        let config = stub_tool(home.path(), stub);
        let crd = write_crd(home.path());

        let output = crdlens(
            home.path(),
            &[
                "generate",
                crd.to_str().unwrap(),
                "--config",
                config.to_str().unwrap(),
            ],
        );

        assert_eq!(output.status.code(), Some(5));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("schema error"), "Got: {}", stderr);
    }

    #[test]
    fn test_generate_missing_output_reports_directory_listing() {
        let home = TempDir::new().unwrap();
        // Succeeds without writing anything
        let stub = "exit 0";
        let config = stub_tool(home.path(), stub);
        let crd = write_crd(home.path());

        let output = crdlens(
            home.path(),
            &[
                "generate",
                crd.to_str().unwrap(),
                "--config",
                config.to_str().unwrap(),
            ],
        );

        assert_eq!(output.status.code(), Some(6));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Certificate_sample.yaml"), "Got: {}", stderr);
        assert!(stderr.contains("certificate-crd.yaml"), "Got: {}", stderr);
    }

    #[test]
    fn test_generate_rejects_non_crd_before_spawning() {
        let home = TempDir::new().unwrap();
        let config = stub_tool(home.path(), WRITING_STUB);
        let path = home.path().join("deploy.yaml");
        fs::write(&path, "kind: Deployment\n").unwrap();

        let output = crdlens(
            home.path(),
            &[
                "generate",
                path.to_str().unwrap(),
                "--config",
                config.to_str().unwrap(),
            ],
        );

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("does not appear to be a CRD"), "Got: {}", stderr);
    }

    #[test]
    fn test_generate_unavailable_tool_suggests_remediation() {
        let home = TempDir::new().unwrap();
        let config = home.path().join("config.yaml");
        fs::write(&config, "ctyPath: /nonexistent/cty\n").unwrap();
        let crd = write_crd(home.path());

        let output = crdlens(
            home.path(),
            &[
                "generate",
                crd.to_str().unwrap(),
                "--config",
                config.to_str().unwrap(),
            ],
        );

        assert_eq!(output.status.code(), Some(4));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("ctyPath"), "Got: {}", stderr);
    }

    #[test]
    fn test_generate_explicit_output_override() {
        let home = TempDir::new().unwrap();
        let config = stub_tool(home.path(), WRITING_STUB);
        let crd = write_crd(home.path());
        let out = home.path().join("samples");
        fs::create_dir_all(&out).unwrap();

        let output = crdlens(
            home.path(),
            &[
                "generate",
                crd.to_str().unwrap(),
                "--output",
                out.to_str().unwrap(),
                "--config",
                config.to_str().unwrap(),
            ],
        );

        assert!(output.status.success());
        assert!(out.join("Certificate_sample.yaml").exists());
    }
}
