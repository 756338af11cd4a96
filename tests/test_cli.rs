//! CLI behavior of the compiled binary.

use std::io::Write;
use std::path::Path;
use std::process::Command;

use tempfile::NamedTempFile;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_coffeeshop-env"));
    // Shield the assertions from the caller's environment.
    cmd.env_remove("COFFEESHOP_PROFILE")
        .env_remove("COFFEESHOP_API_URL")
        .env_remove("COFFEESHOP_CALLBACK_URL")
        .env_remove("COFFEESHOP_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

fn dev_config() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("config")
        .join("development.toml")
}

#[test]
fn check_is_silent_on_success() {
    let output = bin()
        .arg("--check")
        .arg("-f")
        .arg(dev_config())
        .output()
        .expect("binary runs");
    assert!(output.status.success());
    assert!(
        output.stdout.is_empty(),
        "stdout: {}",
        String::from_utf8_lossy(&output.stdout)
    );
    assert!(
        output.stderr.is_empty(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn check_fails_loudly_on_invalid_record() {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(b"api_server_url = \"not a url\"\n").unwrap();

    let output = bin()
        .arg("--check")
        .arg("-f")
        .arg(f.path())
        .output()
        .expect("binary runs");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
    assert!(stderr.contains("api_server_url"), "stderr: {stderr}");
}

#[test]
fn json_output_is_the_record_alone() {
    let output = bin()
        .arg("--json")
        .arg("-f")
        .arg(dev_config())
        .output()
        .expect("binary runs");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["apiServerUrl"], "http://127.0.0.1:5000");
    assert_eq!(value["auth0"]["callbackURL"], "http://127.0.0.1:8100");
}
