use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

fn fixture(root: &Path, rater2_csv: &str) {
    write(&root.join("labels.txt"), "Praise, Question\n");
    write(
        &root.join("rater1/batch.csv"),
        "comment_body,code\nGreat work,praise\nWhy?,question\nFix it,\n",
    );
    write(&root.join("rater2/batch.csv"), rater2_csv);
}

fn irr(args: &[&str], dir: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_irr"))
        .args(args)
        .arg("--dir")
        .arg(dir)
        .output()
        .unwrap()
}

#[test]
fn compute_json_report() {
    let dir = tempdir().unwrap();
    fixture(
        dir.path(),
        "comment_body,code\nGreat work,Praise\nWhy?,\"question, praise\"\nFix it,\n",
    );

    let output = irr(&["compute", "--json"], dir.path());
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["raterA"], "rater1");
    assert_eq!(report["raterB"], "rater2");
    assert_eq!(report["itemCount"], 3);

    let kappa = report["kappa"].as_f64().unwrap();
    assert!((-1.0..=1.0).contains(&kappa));
    assert!(kappa < 1.0);
    assert_eq!(report["labels"].as_array().unwrap().len(), 2);
}

#[test]
fn compute_text_report() {
    let dir = tempdir().unwrap();
    fixture(
        dir.path(),
        "comment_body,code\nGreat work,praise\nWhy?,question\nFix it,\n",
    );

    let output = irr(&["compute"], dir.path());
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Inter-rater reliability: rater1 vs rater2"));
    assert!(stdout.contains("1.0000"));
}

#[test]
fn check_rejects_item_mismatch() {
    let dir = tempdir().unwrap();
    fixture(dir.path(), "comment_body,code\nGreat work,praise\nWhy?,question\n");

    let output = irr(&["check"], dir.path());
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Fix it"), "stderr: {}", stderr);
}

#[test]
fn check_rejects_unknown_label() {
    let dir = tempdir().unwrap();
    fixture(
        dir.path(),
        "comment_body,code\nGreat work,praise\nWhy?,sarcasm\nFix it,\n",
    );

    let output = irr(&["check", "--json"], dir.path());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("sarcasm"));
}

#[test]
fn init_then_check_scaffold() {
    let dir = tempdir().unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_irr"))
        .arg("init")
        .arg(dir.path())
        .status()
        .unwrap();
    assert!(status.success());

    assert!(dir.path().join("irr.yaml").is_file());
    assert!(dir.path().join("rater1").is_dir());
    assert!(dir.path().join("rater2").is_dir());

    // Empty vocabulary is rejected until labels are added
    let output = irr(&["check"], dir.path());
    assert!(!output.status.success());
}
