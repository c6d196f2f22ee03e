//! CLI integration tests
//!
//! Run the `resdex` binary against catalogs written to a temp directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const CATALOG: &str = r#"
v1:
  resources:
    - id: file
      title: "Files: regular files"
      body:
        fields:
          - basic_field:
              id: path
              type: { simple_type: { type: string } }
v2:
  resources:
    - id: file
      title: "Files: regular files"
      body:
        fields:
          - init:
              args:
                - id: path
                  type: { simple_type: { type: string } }
          - basic_field:
              id: path
              type: { simple_type: { type: string } }
          - basic_field:
              id: owner
              type: { simple_type: { type: user } }
    - id: user
      body:
        fields:
          - basic_field:
              id: name
              type: { simple_type: { type: string } }
"#;

fn setup_catalog(temp_dir: &TempDir) -> PathBuf {
    let path = temp_dir.path().join("catalog.yaml");
    fs::write(&path, CATALOG).unwrap();
    path
}

fn run(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_resdex"))
        .current_dir(cwd)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_versions_newest_first() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = setup_catalog(&temp_dir);

    let output = run(
        temp_dir.path(),
        &["--catalog", catalog.to_str().unwrap(), "versions"],
    );

    assert!(output.status.success(), "Stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "v2\nv1\n");
}

#[test]
fn test_render_to_stdout_defaults_to_newest() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = setup_catalog(&temp_dir);

    let output = run(
        temp_dir.path(),
        &["--catalog", catalog.to_str().unwrap(), "render"],
    );

    assert!(output.status.success(), "Stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Resource Pack Reference (v2)"));
    assert!(out.contains("| [user](user.md) *new* |"));
    assert!(out.contains("**Init**\n\nfile(path string)\n"));
    assert!(out.contains("| owner *new* | [user](user.md) |"));
}

#[test]
fn test_render_to_directory() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = setup_catalog(&temp_dir);
    let out_dir = temp_dir.path().join("docs");

    let output = run(
        temp_dir.path(),
        &[
            "--catalog",
            catalog.to_str().unwrap(),
            "render",
            "v1",
            "--output",
            out_dir.to_str().unwrap(),
        ],
    );

    assert!(output.status.success(), "Stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Rendered 2 pages for v1"));

    let index = fs::read_to_string(out_dir.join("README.md")).unwrap();
    assert!(index.contains("| [file](file.md) *new* | Files: regular files |"));
    let file = fs::read_to_string(out_dir.join("file.md")).unwrap();
    assert!(file.contains("description: Files regular files\n"));
    assert!(file.contains("| path *new* | string |"));
}

#[test]
fn test_render_uses_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = setup_catalog(&temp_dir);
    fs::write(
        temp_dir.path().join("resdex.toml"),
        "[render]\npack_name = \"OS\"\nlink_resources = false\n",
    )
    .unwrap();

    let output = run(
        temp_dir.path(),
        &["--catalog", catalog.to_str().unwrap(), "render"],
    );

    assert!(output.status.success(), "Stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("# OS Resource Pack Reference (v2)"));
    assert!(out.contains("| owner *new* | user |"));
}

#[test]
fn test_explicit_missing_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = setup_catalog(&temp_dir);

    let output = run(
        temp_dir.path(),
        &[
            "--catalog",
            catalog.to_str().unwrap(),
            "--config",
            "missing.toml",
            "render",
        ],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Error: [ERR_INVALID_CONFIG]"));
}

#[test]
fn test_diff_summary() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = setup_catalog(&temp_dir);

    let output = run(
        temp_dir.path(),
        &["--catalog", catalog.to_str().unwrap(), "diff", "v2"],
    );

    assert!(output.status.success(), "Stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("## Changes in v2 (since v1)"));
    assert!(out.contains("- `user`"));
    assert!(out.contains("- `file`: `owner`"));
}

#[test]
fn test_diff_json() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = setup_catalog(&temp_dir);

    let output = run(
        temp_dir.path(),
        &["--catalog", catalog.to_str().unwrap(), "diff", "v1", "--json"],
    );

    assert!(output.status.success(), "Stderr: {}", stderr(&output));
    let summary: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(summary["classification"], "initial");
    assert_eq!(summary["previous_version"], serde_json::Value::Null);
}

#[test]
fn test_unknown_version_fails() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = setup_catalog(&temp_dir);

    let output = run(
        temp_dir.path(),
        &["--catalog", catalog.to_str().unwrap(), "diff", "v9"],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Error: Version not found: v9"));
}

#[test]
fn test_export_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = setup_catalog(&temp_dir);
    let export_path = temp_dir.path().join("export.json");

    let output = run(
        temp_dir.path(),
        &[
            "--catalog",
            catalog.to_str().unwrap(),
            "export",
            "--output",
            export_path.to_str().unwrap(),
        ],
    );

    assert!(output.status.success(), "Stderr: {}", stderr(&output));
    let export: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&export_path).unwrap()).unwrap();
    assert_eq!(export["version"], "v2");
    assert_eq!(export["previous_version"], "v1");
    assert_eq!(export["digest"].as_str().unwrap().len(), 64);
    assert!(export["request_id"].as_str().is_some());
}

#[test]
fn test_dir_source() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("versions");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("2024-01.json"), r#"{"resources": [{"id": "a"}]}"#).unwrap();
    fs::write(dir.join("2024-02.yaml"), "resources:\n  - id: a\n  - id: b\n").unwrap();

    let output = run(temp_dir.path(), &["--dir", dir.to_str().unwrap(), "versions"]);

    assert!(output.status.success(), "Stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "2024-02\n2024-01\n");
}

#[test]
fn test_missing_source_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["versions"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Error: Must specify either --catalog or --dir"));
}

#[test]
fn test_format_type() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(
        temp_dir.path(),
        &[
            "format",
            r#"{"map_type": {"key": {"type": "string"}, "value": {"list_type": {"type": {"simple_type": {"type": "int"}}}}}}"#,
        ],
    );

    assert!(output.status.success(), "Stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "map[string][]int\n");
}

#[test]
fn test_format_ambiguous_type_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(
        temp_dir.path(),
        &[
            "format",
            r#"{"simple_type": {"type": "int"}, "list_type": {"type": {}}}"#,
        ],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("ERR_AMBIGUOUS_TYPE"));
}

#[test]
fn test_render_colliding_page_names_fails_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = temp_dir.path().join("catalog.json");
    fs::write(
        &catalog,
        r#"{"v1": {"resources": [{"id": "User"}, {"id": "user"}]}}"#,
    )
    .unwrap();
    let out_dir = temp_dir.path().join("docs");

    let output = run(
        temp_dir.path(),
        &[
            "--catalog",
            catalog.to_str().unwrap(),
            "render",
            "--output",
            out_dir.to_str().unwrap(),
        ],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("share page file user.md"));
    assert!(!out_dir.exists());
}

#[test]
fn test_path_escaping_resource_id_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = temp_dir.path().join("catalog.json");
    fs::write(
        &catalog,
        r#"{"v1": {"resources": [{"id": "../../escape"}]}}"#,
    )
    .unwrap();

    let output = run(
        temp_dir.path(),
        &["--catalog", catalog.to_str().unwrap(), "render", "--output", "docs"],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("ERR_INVALID_INPUT"));
    assert!(!temp_dir.path().join("escape.md").exists());
}
