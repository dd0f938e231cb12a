//! Integration test: Verify binary prints correct version

use std::process::Command;

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_cousins"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);

    // VERIFY: Output contains version number from Cargo.toml
    assert!(
        stdout.contains("0.1.0"),
        "Expected output to contain version '0.1.0', but got: {}",
        stdout
    );
}

#[test]
fn binary_rejects_a_non_http_api_url() {
    // Validation runs before the terminal is touched, so this exits
    // immediately with an error instead of entering the TUI
    let output = Command::new(env!("CARGO_BIN_EXE_cousins"))
        .args(["--api-url", "ftp://flavors.example.com"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error:"),
        "Expected an error message on stderr, but got: {}",
        stderr
    );
}
