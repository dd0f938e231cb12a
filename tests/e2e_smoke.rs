//! E2E smoke tests for the cousins binary
//!
//! These tests verify basic end-to-end functionality by executing the
//! compiled binary. They are gated behind the `e2e-tests` feature flag.
//!
//! Run with: `cargo test --features e2e-tests`

#![cfg(feature = "e2e-tests")]

use std::path::PathBuf;

use expectrl::{spawn, Eof, Regex};

/// Helper to find the cousins binary in target directory
fn find_binary() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

    let debug_binary = manifest_dir.join("target/debug/cousins");
    if debug_binary.exists() {
        return debug_binary;
    }

    let release_binary = manifest_dir.join("target/release/cousins");
    if release_binary.exists() {
        return release_binary;
    }

    panic!("cousins binary not found - run `cargo build` first");
}

#[test]
fn smoke_help_flag() {
    let binary = find_binary();

    let mut session =
        spawn(format!("{} --help", binary.display())).expect("Failed to spawn cousins");

    let _ = session
        .expect(Regex("TUI client for the flavor-similarity search service"))
        .expect("Failed to find description");

    let _ = session
        .expect(Regex("Usage:"))
        .expect("Failed to find help output");

    let _ = session.expect(Eof).expect("Process should exit");
}

#[test]
fn smoke_version_flag() {
    let binary = find_binary();

    let mut session =
        spawn(format!("{} --version", binary.display())).expect("Failed to spawn cousins");

    let _ = session
        .expect(Regex(r"cousins \d+\.\d+\.\d+"))
        .expect("Failed to find version output");

    let _ = session.expect(Eof).expect("Process should exit");
}

#[test]
fn smoke_invalid_api_url_exits_with_error() {
    let binary = find_binary();

    let mut session = spawn(format!(
        "{} --api-url ftp://flavors.example.com",
        binary.display()
    ))
    .expect("Failed to spawn cousins");

    let _ = session
        .expect(Regex("Error:"))
        .expect("Failed to find error output");

    let _ = session.expect(Eof).expect("Process should exit");
}
