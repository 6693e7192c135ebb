/*!
 * End-to-end test of the report over a small project tree
 */

use std::fs;
use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;
use project_reporter::{Config, ReportWriter, Scanner};
use tempfile::tempdir;

fn write_file(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_report_for_project_tree() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    write_file(&root.join("project-reporter"), "tool binary stand-in");
    write_file(&root.join("Cargo.toml"), "[package]\nname = \"demo\"\n");
    write_file(&root.join(".env"), "TOKEN=secret");
    write_file(&root.join("src").join("main.rs"), "fn main() {}\n");
    write_file(&root.join("src").join("bin").join("extra.rs"), "fn main() {}\n");
    write_file(&root.join(".git").join("HEAD"), "ref: refs/heads/main\n");
    write_file(&root.join("assets").join("config.json"), "{}");
    for i in 0..11 {
        write_file(&root.join("assets").join(format!("icon{:02}.svg", i)), "<svg/>");
    }

    let self_path = fs::canonicalize(root.join("project-reporter")).unwrap();
    let config = Config::new(root, Some(self_path));
    config.validate().unwrap();

    let scanner = Scanner::new(config.clone(), Arc::new(ProgressBar::hidden()));
    let statistics = ReportWriter::new(config.clone()).write(&scanner).unwrap();
    let report = fs::read_to_string(config.output_path()).unwrap();

    // 11 icons, Cargo.toml and two sources
    assert_eq!(statistics.files_written, 14);
    assert!(statistics.skipped_files.is_empty());

    assert!(!report.contains("tool binary stand-in"));
    assert!(!report.contains("TOKEN=secret"));
    assert!(!report.contains("refs/heads/main"));
    assert!(!report.contains("config.json"));

    let expected_structure = "FULL DIRECTORY STRUCTURE\n\
                              ========================\n\
                              \n\
                              Cargo.toml\n\
                              assets/\n    (directory contains 11 items)\n\
                              src/\n    bin/\n    main.rs\n\
                              \x20   bin/\n        extra.rs\n\
                              \n\n";
    assert!(
        report.ends_with(expected_structure),
        "unexpected structure:\n{}",
        report
    );

    assert!(report.starts_with("Cargo.toml\n----------\n[package]\nname = \"demo\"\n\n\n"));
}
