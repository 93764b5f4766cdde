//! Harness runner: executes one configured run against a named fixture and
//! packages the result as a [`RunReport`].
//!
//! The runner does not implement any search logic itself; it delegates to
//! `statespace_search` and only assembles the report.
//!
//! # Pipeline
//!
//! ```text
//! RunConfig → resolve fixture → strategy call
//!   → outcome JSON + trace digest → canonical_json_bytes(report)
//!   → canonical_hash(DOMAIN_RUN_REPORT)
//! ```

use serde::{Deserialize, Serialize};
use statespace_kernel::problem::TreeChild;
use statespace_kernel::proof::canon::{canonical_json_bytes, canonical_real, CanonError};
use statespace_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_RUN_REPORT};
use statespace_search::adversarial::{alpha_beta, minimax, GameOutcome};
use statespace_search::climb::hill_climb;
use statespace_search::error::SearchError;
use statespace_search::policy::{HillClimbConfig, SearchPolicy};
use statespace_search::search::{search, SearchOutcome, Strategy};
use statespace_search::uninformed::backtrack;
use thiserror::Error;
use tracing::{debug, info_span};

use crate::fixtures::{game_tree, graph_fixture, GAME_FIXTURE, GAME_ROOT};

/// Which algorithm a run executes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunKind {
    /// One of the frontier strategies on the shared driver.
    Search { strategy: Strategy },
    /// Recursive-order depth-first search.
    Backtrack,
    HillClimb {
        #[serde(default)]
        config: HillClimbConfig,
    },
    Minimax {
        #[serde(default)]
        depth_limit: Option<u32>,
        #[serde(default = "maximizing_root")]
        maximizing: bool,
    },
    AlphaBeta {
        #[serde(default)]
        depth_limit: Option<u32>,
        #[serde(default = "maximizing_root")]
        maximizing: bool,
    },
}

fn maximizing_root() -> bool {
    true
}

impl RunKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Search { .. } => "search",
            Self::Backtrack => "backtrack",
            Self::HillClimb { .. } => "hill_climb",
            Self::Minimax { .. } => "minimax",
            Self::AlphaBeta { .. } => "alpha_beta",
        }
    }

    /// Whether this kind evaluates a game tree instead of a graph.
    #[must_use]
    pub fn is_adversarial(&self) -> bool {
        matches!(self, Self::Minimax { .. } | Self::AlphaBeta { .. })
    }
}

/// A complete, serializable description of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub fixture: String,
    pub run: RunKind,
    /// Used by the graph strategies; ignored by hill climbing and game runs.
    #[serde(default)]
    pub policy: SearchPolicy,
}

impl RunConfig {
    #[must_use]
    pub fn search(fixture: &str, strategy: Strategy) -> Self {
        Self {
            fixture: fixture.to_string(),
            run: RunKind::Search { strategy },
            policy: SearchPolicy::default(),
        }
    }

    /// Parse a run description from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::ConfigParse`] for malformed JSON or unknown kinds.
    pub fn from_json(text: &str) -> Result<Self, RunError> {
        serde_json::from_str(text).map_err(|e| RunError::ConfigParse {
            detail: e.to_string(),
        })
    }

    /// JSON value of this config. Every field is a string, bool, or integer.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::ConfigParse`] if serialization fails.
    pub fn to_json_value(&self) -> Result<serde_json::Value, RunError> {
        serde_json::to_value(self).map_err(|e| RunError::ConfigParse {
            detail: e.to_string(),
        })
    }
}

/// Error during a harness run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("run config parse error: {detail}")]
    ConfigParse { detail: String },

    #[error("unknown fixture {name:?} for {kind} run")]
    UnknownFixture { name: String, kind: &'static str },

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("canonical JSON error: {0}")]
    Canon(#[from] CanonError),
}

/// Packaged result of one run.
///
/// `bytes` is the canonical JSON of the report body and `digest` is its
/// domain-separated hash. Two runs of the same config produce identical
/// bytes.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub config: RunConfig,
    /// Status word: `found`, `not_found`, `budget_exhausted`, a hill-climb
    /// stop reason, or `evaluated` for game runs.
    pub status: String,
    pub trace_digest: ContentHash,
    pub body: serde_json::Value,
    pub bytes: Vec<u8>,
    pub digest: ContentHash,
}

/// Execute `config` and package the report.
///
/// # Errors
///
/// [`RunError::UnknownFixture`] when the fixture does not exist for the
/// run kind, [`RunError::Search`] for any search failure, and
/// [`RunError::Canon`] if the report cannot be canonicalized.
pub fn run(config: &RunConfig) -> Result<RunReport, RunError> {
    let span = info_span!("run", fixture = %config.fixture, kind = config.run.as_str());
    let _guard = span.enter();

    let (status, outcome, trace_digest) = if config.run.is_adversarial() {
        run_game(config)?
    } else {
        run_graph(config)?
    };

    let body = serde_json::json!({
        "config": config.to_json_value()?,
        "outcome": outcome,
        "status": status,
        "trace_digest": trace_digest.as_str(),
    });
    let bytes = canonical_json_bytes(&body)?;
    let digest = canonical_hash(DOMAIN_RUN_REPORT, &bytes);
    debug!(%status, %digest, "run report built");

    Ok(RunReport {
        config: config.clone(),
        status,
        trace_digest,
        body,
        bytes,
        digest,
    })
}

type Packaged = (String, serde_json::Value, ContentHash);

fn run_graph(config: &RunConfig) -> Result<Packaged, RunError> {
    let fixture = graph_fixture(&config.fixture).ok_or_else(|| RunError::UnknownFixture {
        name: config.fixture.clone(),
        kind: config.run.as_str(),
    })?;

    match &config.run {
        RunKind::Search { strategy } => {
            let outcome = search(
                &fixture.graph,
                &fixture.start,
                &fixture.goal,
                *strategy,
                &config.policy,
            )?;
            package_search(&outcome)
        }
        RunKind::Backtrack => {
            let outcome = backtrack(&fixture.graph, &fixture.start, &fixture.goal, &config.policy)?;
            package_search(&outcome)
        }
        RunKind::HillClimb { config: climb } => {
            let outcome = hill_climb(&fixture.graph, &fixture.start, Some(&fixture.goal), climb)?;
            Ok((
                outcome.reason.as_str().to_string(),
                outcome.to_json_value()?,
                outcome.digest()?,
            ))
        }
        RunKind::Minimax { .. } | RunKind::AlphaBeta { .. } => Err(RunError::UnknownFixture {
            name: config.fixture.clone(),
            kind: config.run.as_str(),
        }),
    }
}

fn package_search(outcome: &SearchOutcome<String>) -> Result<Packaged, RunError> {
    let json = serde_json::json!({
        "cost": canonical_real(outcome.cost),
        "frontier_high_water": outcome.frontier_high_water,
        "path": outcome.path,
        "visited_order": outcome.visited_order,
    });
    Ok((
        outcome.status.as_str().to_string(),
        json,
        outcome.trace.digest()?,
    ))
}

fn run_game(config: &RunConfig) -> Result<Packaged, RunError> {
    let (depth_limit, maximizing, pruning) = match config.run {
        RunKind::AlphaBeta {
            depth_limit,
            maximizing,
        } => (depth_limit, maximizing, true),
        RunKind::Minimax {
            depth_limit,
            maximizing,
        } => (depth_limit, maximizing, false),
        _ => (None, true, false),
    };
    if config.fixture != GAME_FIXTURE {
        return Err(RunError::UnknownFixture {
            name: config.fixture.clone(),
            kind: config.run.as_str(),
        });
    }

    let tree = game_tree();
    let root = TreeChild::node(GAME_ROOT);
    let outcome = if pruning {
        alpha_beta(&tree, &root, depth_limit, maximizing)?
    } else {
        minimax(&tree, &root, depth_limit, maximizing)?
    };
    Ok((
        "evaluated".to_string(),
        package_game(&outcome),
        outcome.digest()?,
    ))
}

fn package_game(outcome: &GameOutcome) -> serde_json::Value {
    serde_json::json!({
        "evaluated": outcome.evaluated_count(),
        "pruned": outcome
            .pruned()
            .into_iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
        "value": canonical_real(outcome.value),
    })
}
