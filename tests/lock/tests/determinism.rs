//! In-process determinism: identical inputs give identical visited order,
//! path, trace bytes, and report digest, regardless of logging.

use lock_tests::runs::standard_runs;
use statespace_harness::fixtures::{game_tree, graph_fixture, GAME_ROOT, GRAPH_FIXTURES};
use statespace_harness::runner::run;
use statespace_kernel::problem::TreeChild;
use statespace_search::adversarial::alpha_beta;
use statespace_search::policy::SearchPolicy;
use statespace_search::search::{search, Strategy};
use tracing_subscriber::EnvFilter;

#[test]
fn every_standard_run_is_stable_n10() {
    for (key, config) in standard_runs() {
        let first = run(&config).unwrap();
        for _ in 1..10 {
            let again = run(&config).unwrap();
            assert_eq!(again.bytes, first.bytes, "{key}");
            assert_eq!(again.digest, first.digest, "{key}");
        }
    }
}

#[test]
fn standard_run_digests_are_distinct_per_trace() {
    // Every report body embeds its own config.
    let runs = standard_runs();
    let mut digests: Vec<_> = runs.iter().map(|(_, c)| run(c).unwrap().digest).collect();
    digests.sort();
    digests.dedup();
    assert_eq!(digests.len(), runs.len());
}

#[test]
fn driver_outputs_repeat_exactly() {
    let policy = SearchPolicy::default();
    for name in GRAPH_FIXTURES {
        let fixture = graph_fixture(name).unwrap();
        for strategy in Strategy::ALL {
            let a = search(&fixture.graph, &fixture.start, &fixture.goal, strategy, &policy).unwrap();
            let b = search(&fixture.graph, &fixture.start, &fixture.goal, strategy, &policy).unwrap();
            assert_eq!(a.visited_order, b.visited_order, "{name}/{strategy}");
            assert_eq!(a.path, b.path, "{name}/{strategy}");
            assert_eq!(a.trace, b.trace, "{name}/{strategy}");
        }
    }
}

#[test]
fn installed_subscriber_does_not_change_results() {
    let config = standard_runs()
        .into_iter()
        .find(|(key, _)| key == "stale/uniform_cost")
        .map(|(_, config)| config)
        .unwrap();
    let quiet = run(&config).unwrap();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("trace"))
        .with_test_writer()
        .finish();
    let loud = tracing::subscriber::with_default(subscriber, || run(&config).unwrap());
    assert_eq!(quiet.bytes, loud.bytes);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("trace"))
        .with_test_writer()
        .finish();
    let tree = game_tree();
    let root = TreeChild::node(GAME_ROOT);
    let logged = tracing::subscriber::with_default(subscriber, || {
        alpha_beta(&tree, &root, None, true).unwrap()
    });
    let silent = alpha_beta(&tree, &root, None, true).unwrap();
    assert_eq!(logged.digest().unwrap(), silent.digest().unwrap());
}
