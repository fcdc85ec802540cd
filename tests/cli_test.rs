mod common;

use anyhow::Result;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_cli(dir: &TempDir, args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_third-mapping"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

#[test]
fn test_missing_table_exits_with_guidance() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = run_cli(&temp_dir, &[])?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("third-mapping-table.txt"), "stderr: {}", stderr);
    assert!(!temp_dir.path().join("third-mapping.json").exists());
    Ok(())
}

#[test]
fn test_complete_table_prints_summary() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("third-mapping-table.txt"), common::table(495))?;

    let output = run_cli(&temp_dir, &[])?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("third-mapping.json"));
    assert!(stdout.contains("Parsed lines: 495"));
    assert!(stdout.contains("Unique combinations: 495"));
    assert!(!stderr.contains("Warning"));
    assert!(temp_dir.path().join("third-mapping.json").exists());
    Ok(())
}

#[test]
fn test_incomplete_table_warns_but_succeeds() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("third-mapping-table.txt"), common::table(490))?;

    let output = run_cli(&temp_dir, &[])?;

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Warning: expected 495"), "stderr: {}", stderr);
    assert!(temp_dir.path().join("third-mapping.json").exists());
    Ok(())
}

#[test]
fn test_unresolvable_row_fails_without_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut table = common::table(4);
    table.push_str("\n5 | A B | 3A 3A 3B 3B 3D 3D 3E 3E");
    std::fs::write(temp_dir.path().join("third-mapping-table.txt"), table)?;

    let output = run_cli(&temp_dir, &[])?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("5 | A B | 3A 3A"), "stderr: {}", stderr);
    assert!(!temp_dir.path().join("third-mapping.json").exists());
    Ok(())
}
