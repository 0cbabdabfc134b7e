//! Tests that run the compiled `tmdbapi` binary.

use std::process::Command;

#[test]
fn test_missing_key_is_reported_once() {
    let output = Command::new(env!("CARGO_BIN_EXE_tmdbapi"))
        .args(["popular"])
        .env_remove("TMDB_API_KEY")
        .env_remove("TMDB_API_URL")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("not configured").count(), 1, "{stderr}");
    assert_eq!(stderr.lines().count(), 2, "{stderr}");
    assert!(stderr.contains("Hint: Set TMDB_API_KEY"));
}
