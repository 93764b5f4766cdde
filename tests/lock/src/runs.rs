//! The fixed set of runs used for determinism checks.

use statespace_harness::fixtures::{GAME_FIXTURE, GRAPH_FIXTURES};
use statespace_harness::runner::{RunConfig, RunKind};
use statespace_search::policy::{HillClimbConfig, SearchPolicy};
use statespace_search::search::Strategy;

/// Every strategy on every graph fixture, backtracking and hill climbing on
/// every graph fixture, and both game evaluations. Keys are unique.
#[must_use]
pub fn standard_runs() -> Vec<(String, RunConfig)> {
    let mut runs = Vec::new();
    for fixture in GRAPH_FIXTURES {
        for strategy in Strategy::ALL {
            runs.push((
                format!("{fixture}/{strategy}"),
                RunConfig::search(fixture, strategy),
            ));
        }
        runs.push((format!("{fixture}/backtrack"), graph_run(fixture, RunKind::Backtrack)));
        runs.push((
            format!("{fixture}/hill_climb"),
            graph_run(
                fixture,
                RunKind::HillClimb {
                    config: HillClimbConfig {
                        max_steps: Some(32),
                        ..HillClimbConfig::default()
                    },
                },
            ),
        ));
    }
    for pruning in [false, true] {
        let run = if pruning {
            RunKind::AlphaBeta {
                depth_limit: None,
                maximizing: true,
            }
        } else {
            RunKind::Minimax {
                depth_limit: None,
                maximizing: true,
            }
        };
        runs.push((format!("{GAME_FIXTURE}/{}", run.as_str()), graph_run(GAME_FIXTURE, run)));
    }
    runs
}

fn graph_run(fixture: &str, run: RunKind) -> RunConfig {
    RunConfig {
        fixture: fixture.to_string(),
        run,
        policy: SearchPolicy::default(),
    }
}
