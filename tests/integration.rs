//! Integration tests for dirscan


use harness::{TestDir, dirscan, run_dirscan};
use predicates::prelude::*;

const OUTPUT_FILE: &str = "directory_structure.txt";

fn sample_tree() -> TestDir {
    let dir = TestDir::new();
    dir.add_sized("a.txt", 5);
    dir.add_sized("sub/b.log", 2048);
    dir
}

const SAMPLE_REPORT: &str = "📁 sub/\n  📄 b.log (2.0KB)\n📄 a.txt (5.0B)";

#[test]
fn test_report_saved_and_printed() {
    let scanned = sample_tree();
    let cwd = TestDir::new();
    let target = scanned.path().to_string_lossy().to_string();

    let (stdout, _stderr, success) = run_dirscan(cwd.path(), &[&target], "");
    assert!(success, "dirscan should succeed");

    assert_eq!(cwd.read(OUTPUT_FILE), SAMPLE_REPORT);
    assert_eq!(
        stdout,
        format!(
            "\nDirectory Structure:\n===================\n{}\n\nStructure has been saved to {}\n",
            SAMPLE_REPORT, OUTPUT_FILE
        )
    );
}

#[test]
fn test_path_read_from_prompt() {
    let scanned = sample_tree();
    let cwd = TestDir::new();
    let answer = format!("  {}  \n", scanned.path().display());

    dirscan(cwd.path())
        .write_stdin(answer)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Enter the directory path to scan (or press Enter for current directory):\n",
        ))
        .stdout(predicate::str::contains("📄 b.log (2.0KB)"));

    assert_eq!(cwd.read(OUTPUT_FILE), SAMPLE_REPORT);
}

#[test]
fn test_empty_answer_scans_current_directory() {
    let cwd = sample_tree();

    dirscan(cwd.path())
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("📁 sub/"));

    // The report is written after the scan, so it is not listed in itself
    assert_eq!(cwd.read(OUTPUT_FILE), SAMPLE_REPORT);
}

#[test]
fn test_missing_path_writes_nothing() {
    let cwd = TestDir::new();

    dirscan(cwd.path())
        .arg("does/not/exist")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Path 'does/not/exist' does not exist.",
        ));

    assert!(!cwd.path().join(OUTPUT_FILE).exists());
}

#[test]
fn test_missing_path_keeps_existing_report() {
    let cwd = TestDir::new();
    cwd.add_file(OUTPUT_FILE, "previous report");

    let (_stdout, _stderr, success) = run_dirscan(cwd.path(), &[], "/no/such/place\n");
    assert!(!success);
    assert_eq!(cwd.read(OUTPUT_FILE), "previous report");
}

#[test]
fn test_existing_report_overwritten() {
    let scanned = sample_tree();
    let cwd = TestDir::new();
    cwd.add_file(OUTPUT_FILE, "stale contents that should vanish entirely");
    let target = scanned.path().to_string_lossy().to_string();

    let (_stdout, _stderr, success) = run_dirscan(cwd.path(), &[&target], "");
    assert!(success);
    assert_eq!(cwd.read(OUTPUT_FILE), SAMPLE_REPORT);
}

#[test]
fn test_custom_output_file() {
    let scanned = sample_tree();
    let cwd = TestDir::new();
    let target = scanned.path().to_string_lossy().to_string();

    dirscan(cwd.path())
        .args([target.as_str(), "--output", "tree.txt"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "Structure has been saved to tree.txt\n",
        ));

    assert_eq!(cwd.read("tree.txt"), SAMPLE_REPORT);
    assert!(!cwd.path().join(OUTPUT_FILE).exists());
}

#[test]
fn test_hidden_entries_excluded() {
    let scanned = sample_tree();
    scanned.add_file(".env", "SECRET=1");
    scanned.add_file(".git/HEAD", "ref: refs/heads/main");
    scanned.add_file("sub/.cache/data", "cached");
    let cwd = TestDir::new();
    let target = scanned.path().to_string_lossy().to_string();

    let (stdout, _stderr, success) = run_dirscan(cwd.path(), &[&target], "");
    assert!(success);
    assert!(!stdout.contains(".env"), "hidden file listed: {}", stdout);
    assert!(!stdout.contains(".git"), "hidden dir listed: {}", stdout);
    assert!(!stdout.contains(".cache"), "nested hidden dir listed: {}", stdout);
    assert_eq!(cwd.read(OUTPUT_FILE), SAMPLE_REPORT);
}

#[test]
fn test_json_output() {
    let scanned = sample_tree();
    let cwd = TestDir::new();
    let target = scanned.path().to_string_lossy().to_string();

    let (stdout, _stderr, success) = run_dirscan(cwd.path(), &[&target, "--json"], "");
    assert!(success);

    let json_end = stdout
        .find("\nStructure has been saved")
        .expect("confirmation message");
    let value: serde_json::Value = serde_json::from_str(&stdout[..json_end]).unwrap();
    assert_eq!(value["type"], "directory");
    assert_eq!(value["contents"].as_array().map(Vec::len), Some(2));
    assert!(!stdout.contains("Directory Structure:"));

    // The saved report is always the text tree
    assert_eq!(cwd.read(OUTPUT_FILE), SAMPLE_REPORT);
}

#[test]
#[cfg(unix)]
fn test_home_directory_expansion() {
    let home = sample_tree();
    let cwd = TestDir::new();

    dirscan(cwd.path())
        .env("HOME", home.path())
        .write_stdin("~\n")
        .assert()
        .success();

    assert_eq!(cwd.read(OUTPUT_FILE), SAMPLE_REPORT);
}
