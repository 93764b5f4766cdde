//! Report directories for every standard run: write, read, replay-verify,
//! and fail closed on consistent-looking edits.

use lock_tests::report_helpers::restamp_report;
use lock_tests::runs::standard_runs;
use statespace_harness::report_dir::{
    read_report_dir, verify_report_dir, write_report_dir, ReportDirReadError, ReportDirVerifyError,
};
use statespace_harness::runner::{run, RunConfig};
use statespace_search::search::Strategy;

#[test]
fn every_standard_run_verifies_from_disk() {
    for (key, config) in standard_runs() {
        let report = run(&config).unwrap();
        let dir = tempfile::tempdir().unwrap();
        write_report_dir(&report, dir.path()).unwrap();
        let verified = verify_report_dir(dir.path()).unwrap_or_else(|e| panic!("{key}: {e}"));
        assert_eq!(verified.digest, report.digest, "{key}");
    }
}

#[test]
fn directory_path_is_not_part_of_the_digest() {
    let report = run(&RunConfig::search("detour", Strategy::UniformCost)).unwrap();
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    let nested = b.path().join("deeper").join("still");
    write_report_dir(&report, a.path()).unwrap();
    write_report_dir(&report, &nested).unwrap();
    assert_eq!(
        read_report_dir(a.path()).unwrap().digest,
        read_report_dir(&nested).unwrap().digest
    );
}

#[test]
fn restamped_path_edit_is_caught_by_replay() {
    let report = run(&RunConfig::search("tree", Strategy::BreadthFirst)).unwrap();
    let dir = tempfile::tempdir().unwrap();
    write_report_dir(&report, dir.path()).unwrap();
    let new_digest = restamp_report(dir.path(), |body| {
        body["outcome"]["path"] = serde_json::json!(["0", "4", "15"]);
    });

    let stored = read_report_dir(dir.path()).unwrap();
    assert_eq!(stored.digest, new_digest);
    assert_ne!(stored.digest, report.digest);
    let err = verify_report_dir(dir.path()).unwrap_err();
    assert!(matches!(err, ReportDirVerifyError::ReplayMismatch { .. }), "{err}");
}

#[test]
fn restamped_config_edit_is_caught_on_read() {
    let report = run(&RunConfig::search("tree", Strategy::BreadthFirst)).unwrap();
    let dir = tempfile::tempdir().unwrap();
    write_report_dir(&report, dir.path()).unwrap();
    restamp_report(dir.path(), |body| {
        body["config"]["fixture"] = "detour".into();
    });
    let err = read_report_dir(dir.path()).unwrap_err();
    assert!(matches!(err, ReportDirReadError::ConfigMismatch), "{err}");
}

#[test]
fn missing_digest_file_fails_closed() {
    let report = run(&RunConfig::search("plateau", Strategy::GreedyBestFirst)).unwrap();
    let dir = tempfile::tempdir().unwrap();
    write_report_dir(&report, dir.path()).unwrap();
    std::fs::remove_file(dir.path().join("report_digest.txt")).unwrap();
    let err = read_report_dir(dir.path()).unwrap_err();
    assert!(matches!(err, ReportDirReadError::MissingFile { .. }), "{err}");
}
