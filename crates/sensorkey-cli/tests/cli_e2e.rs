//! End-to-end tests for the `sensorkey` binary.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn sensorkey_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sensorkey"))
}

fn keygen(keys_dir: &std::path::Path, index: usize) {
    let output = sensorkey_cmd()
        .arg("--keys-dir")
        .arg(keys_dir)
        .args(["keygen", "--index", &index.to_string()])
        .output()
        .expect("failed to run sensorkey keygen");
    assert!(output.status.success(), "keygen should succeed");
}

#[test]
fn keygen_then_validate_round_trip() {
    let tmp = TempDir::new().unwrap();
    keygen(tmp.path(), 0);

    assert!(tmp.path().join("key_0_private.pem").exists());
    assert!(tmp.path().join("key_0_public.pem").exists());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let metadata = fs::metadata(tmp.path().join("key_0_private.pem")).unwrap();
        assert_eq!(metadata.permissions().mode() & 0o777, 0o600);
    }

    let output = sensorkey_cmd()
        .arg("--keys-dir")
        .arg(tmp.path())
        .arg("validate")
        .arg(tmp.path().join("key_0_public.pem"))
        .output()
        .expect("failed to run sensorkey validate");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"is_valid\": true"));
    assert!(stdout.contains("\"key_index\": 0"));
}

#[test]
fn keygen_refuses_overwrite_without_force() {
    let tmp = TempDir::new().unwrap();
    keygen(tmp.path(), 0);

    let output = sensorkey_cmd()
        .arg("--keys-dir")
        .arg(tmp.path())
        .args(["keygen", "--index", "0"])
        .output()
        .expect("failed to run second keygen");
    assert!(!output.status.success(), "should fail without --force");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--force"));
}

#[test]
fn malformed_candidate_exits_with_format_error_code() {
    let tmp = TempDir::new().unwrap();
    let bad = tmp.path().join("bad.pem");
    fs::write(&bad, "this is not a key").unwrap();

    let output = sensorkey_cmd()
        .arg("--keys-dir")
        .arg(tmp.path())
        .arg("validate")
        .arg(&bad)
        .output()
        .expect("failed to run sensorkey validate");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid public key format"));
}

#[test]
fn valid_key_against_empty_registry_is_not_valid() {
    let provisioned = TempDir::new().unwrap();
    keygen(provisioned.path(), 0);

    let empty = TempDir::new().unwrap();
    let output = sensorkey_cmd()
        .arg("--keys-dir")
        .arg(empty.path())
        .arg("validate")
        .arg(provisioned.path().join("key_0_public.pem"))
        .output()
        .expect("failed to run sensorkey validate");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"is_valid\": false"));
    assert!(stdout.contains("No registered keys"));
}

#[test]
fn info_reports_counts_and_directory() {
    let tmp = TempDir::new().unwrap();
    let output = sensorkey_cmd()
        .arg("--keys-dir")
        .arg(tmp.path())
        .args(["--expected-count", "7", "info"])
        .output()
        .expect("failed to run sensorkey info");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"total_registered_keys\": 0"));
    assert!(stdout.contains("\"expected_keys\": 7"));
}

#[test]
fn list_on_empty_registry_prints_zero_entries() {
    let tmp = TempDir::new().unwrap();
    let output = sensorkey_cmd()
        .arg("--keys-dir")
        .arg(tmp.path())
        .arg("list")
        .output()
        .expect("failed to run sensorkey list");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"count\": 0"));
}
