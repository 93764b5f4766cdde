//! Binary that runs every standard configuration through the harness and
//! prints deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: one `key=report_digest` line per run, in a fixed order, then
//! `run_count=N`. Set `STATESPACE_LOG` (an `EnvFilter` directive such as
//! `statespace_search=trace`) to stream tracing events to stderr; stdout is
//! unaffected.

use lock_tests::runs::standard_runs;
use statespace_harness::runner::run;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Ok(filter) = EnvFilter::try_from_env("STATESPACE_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let runs = standard_runs();
    for (key, config) in &runs {
        let report = run(config).unwrap_or_else(|e| panic!("run {key} failed: {e}"));
        println!("{key}={}", report.digest.as_str());
    }
    println!("run_count={}", runs.len());
}
