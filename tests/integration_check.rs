// tests/integration_check.rs
mod common;

use bplint_core::config::Config;
use bplint_core::reporting::{ConsoleReporter, JsonReporter};
use bplint_core::scan::Linter;
use bplint_core::types::RunSummary;
use std::fs;
use std::path::Path;

fn config(root: &Path) -> Config {
    Config::new(root)
}

fn run_console(config: &Config) -> (RunSummary, String) {
    colored::control::set_override(false);
    let linter = Linter::new(&config.rules).unwrap();
    let mut reporter = ConsoleReporter::new(Vec::new());
    let summary = linter.run(config, &mut reporter).unwrap();
    let out = String::from_utf8(reporter.into_inner()).unwrap();
    (summary, out)
}

fn run_json(config: &Config) -> (RunSummary, String) {
    let linter = Linter::new(&config.rules).unwrap();
    let mut reporter = JsonReporter::new(Vec::new());
    let summary = linter.run(config, &mut reporter).unwrap();
    (summary, String::from_utf8(reporter.into_inner()).unwrap())
}

#[test]
fn test_all_components_pass() {
    let d = common::portfolio();
    let (summary, out) = run_console(&config(d.path()));

    assert_eq!(summary.files_checked, 5);
    assert_eq!(summary.files_missing, 0);
    assert_eq!(summary.files_warned, 0);
    assert!(summary.overall_pass);
    assert!(out.contains("Components checked: 5"));
    assert!(out.contains("Issues found: 0"));
    assert!(out.contains("All components verified successfully"));
}

#[test]
fn test_missing_file_fails_run() {
    let d = common::portfolio();
    fs::remove_file(d.path().join("src/components/Contact.jsx")).unwrap();

    let (summary, out) = run_console(&config(d.path()));

    assert_eq!(summary.files_checked, 5);
    assert_eq!(summary.files_missing, 1);
    assert!(!summary.overall_pass);
    assert!(out.contains("src/components/Contact.jsx not found"));
    assert!(out.contains("Issues found: 1"));
    assert!(out.contains("Some issues need attention"));
    // Remaining files are still reported after the missing one.
    assert!(out.contains("Testing: Education"));
}

#[test]
fn test_missing_file_does_not_stop_later_files() {
    let d = common::portfolio();
    fs::remove_file(d.path().join("src/components/Navigation.jsx")).unwrap();

    let (summary, out) = run_console(&config(d.path()));

    assert_eq!(summary.files_checked, 5);
    assert_eq!(summary.files_missing, 1);
    for name in ["Profile", "WorkExperience", "Education", "Contact"] {
        assert!(out.contains(&format!("Testing: {name}")), "missing section for {name}");
    }
}

#[test]
fn test_unresponsive_file_is_warning_only() {
    let d = common::portfolio();
    common::write(d.path(), "src/components/Contact.jsx", common::PLAIN_CONTACT);

    let (summary, out) = run_console(&config(d.path()));

    assert_eq!(summary.files_missing, 0);
    assert_eq!(summary.files_warned, 1);
    assert!(summary.overall_pass);
    assert!(out.contains("No responsive classes detected"));
    assert!(out.contains("This component may not be responsive"));
    assert!(out.contains("All components verified successfully"));
}

#[test]
fn test_unresponsive_file_json_flag() {
    let d = common::portfolio();
    common::write(d.path(), "src/components/Contact.jsx", common::PLAIN_CONTACT);

    let (_, out) = run_json(&config(d.path()));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    let contact = &json["files"][4];
    assert_eq!(contact["path"], "src/components/Contact.jsx");
    assert_eq!(contact["found"], true);
    assert_eq!(contact["has_any_responsive_marker"], false);
}

#[test]
fn test_console_section_contents() {
    let d = common::portfolio();
    let (_, out) = run_console(&config(d.path()));

    assert!(out.contains("Testing: Navigation"));
    assert!(out.contains("Breakpoints: sm, md, lg"));
    assert!(out.contains("Total responsive classes: 4"));
    assert!(out.contains("Hidden on mobile: 1 instance"));
    assert!(out.contains("Responsive spacing: 1 instance"));
    // Zero-count patterns are omitted from the detail list.
    let nav = out.split("Testing: Profile").next().unwrap();
    assert!(!nav.contains("Responsive grid"));
}

#[test]
fn test_scan_is_idempotent() {
    let d = common::portfolio();
    fs::remove_file(d.path().join("src/components/Profile.jsx")).unwrap();
    let cfg = config(d.path());

    let (first_summary, first) = run_json(&cfg);
    let (second_summary, second) = run_json(&cfg);

    assert_eq!(first, second);
    assert_eq!(first_summary, second_summary);
}

#[test]
fn test_json_report_shape() {
    let d = common::portfolio();
    fs::remove_file(d.path().join("src/components/Education.jsx")).unwrap();

    let (summary, out) = run_json(&config(d.path()));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["files"].as_array().unwrap().len(), 5);
    assert_eq!(json["summary"]["files_checked"], 5);
    assert_eq!(json["summary"]["files_missing"], 1);
    assert_eq!(json["summary"]["overall_pass"], false);
    assert!(!summary.overall_pass);

    let education = &json["files"][3];
    assert_eq!(education["found"], false);
    assert_eq!(education["error"], "not found");

    let work = &json["files"][2];
    let grid = work["patterns"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == "Responsive grid")
        .unwrap();
    assert_eq!(grid["count"], 1);
}

#[test]
fn test_files_checked_matches_input_length() {
    let d = common::portfolio();
    let mut cfg = config(d.path());
    cfg.override_files(vec![
        "src/components/Profile.jsx".into(),
        "nope/One.jsx".into(),
        "nope/Two.jsx".into(),
    ]);

    let (summary, _) = run_console(&cfg);

    assert_eq!(summary.files_checked, 3);
    assert_eq!(summary.files_missing, 2);
}

#[test]
fn test_empty_file_list_passes() {
    let d = tempfile::tempdir().unwrap();
    let mut cfg = config(d.path());
    cfg.files.clear();

    let (summary, out) = run_console(&cfg);

    assert_eq!(summary.files_checked, 0);
    assert!(summary.overall_pass);
    assert!(out.contains("Components checked: 0"));
}

#[test]
fn test_unreadable_file_counts_as_missing() {
    let d = common::portfolio();
    fs::write(d.path().join("src/components/Profile.jsx"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();

    let (summary, out) = run_console(&config(d.path()));

    assert_eq!(summary.files_checked, 5);
    assert_eq!(summary.files_missing, 1);
    assert!(!summary.overall_pass);
    assert!(out.contains("✗ src/components/Profile.jsx unreadable: not valid UTF-8"));
    assert!(out.contains("Issues found: 1"));
    for name in ["WorkExperience", "Education", "Contact"] {
        assert!(out.contains(&format!("Testing: {name}")), "missing section for {name}");
    }
}
