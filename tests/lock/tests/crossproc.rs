//! Cross-process determinism: spawns the `search_fixture` binary under
//! several environment variants and asserts identical output.
//!
//! Results must not depend on process-level state (cwd, locale, env vars,
//! hash-map seeds, or whether a tracing subscriber is installed).

use std::path::Path;
use std::process::Command;

use lock_tests::runs::standard_runs;
use statespace_harness::runner::run;

/// `cargo test` puts test binaries in `target/<profile>/deps/`; the
/// `search_fixture` binary lives one level up.
fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("search_fixture");
    path.to_string_lossy().to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

/// Run the binary with the given cwd and environment overrides and return
/// its stdout.
fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();
    let mut command = Command::new(&bin);
    command
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("STATESPACE_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);
    assert!(baseline.contains("tree/breadth_first=sha256:"), "{baseline}");

    let alt_cwd = if cfg!(target_os = "windows") {
        "C:\\"
    } else {
        "/tmp"
    };
    assert_eq!(baseline, run_variant(alt_cwd, &[]), "cwd changed output");

    assert_eq!(
        baseline,
        run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]),
        "locale changed output"
    );

    assert_eq!(
        baseline,
        run_variant(
            &root,
            &[
                ("STATESPACE_NOISE", "should_not_matter"),
                ("TZ", "America/New_York"),
                ("HOME", "/nonexistent"),
            ],
        ),
        "spurious env vars changed output"
    );

    assert_eq!(
        baseline,
        run_variant(&root, &[("STATESPACE_LOG", "trace")]),
        "tracing changed output"
    );
}

#[test]
fn crossproc_output_matches_in_process_runs() {
    let output = run_variant(&workspace_root(), &[]);
    let lines: Vec<&str> = output.lines().collect();
    let runs = standard_runs();
    assert_eq!(lines.len(), runs.len() + 1);
    for ((key, config), line) in runs.iter().zip(&lines) {
        let report = run(config).unwrap();
        assert_eq!(*line, format!("{key}={}", report.digest.as_str()));
    }
    assert_eq!(lines[runs.len()], format!("run_count={}", runs.len()));
}
