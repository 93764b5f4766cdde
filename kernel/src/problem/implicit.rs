//! Closure-backed problems for implicit state spaces.

use std::fmt::Debug;
use std::hash::Hash;

use super::{Edge, SearchProblem};

/// A problem whose successor and heuristic functions are closures.
///
/// Useful for state spaces too large (or infinite) to enumerate up front.
/// `contains` is always true; reachability is the only notion of membership.
pub struct FnProblem<S, F, H = fn(&S) -> Option<f64>> {
    successors: F,
    heuristic: H,
    _state: std::marker::PhantomData<fn() -> S>,
}

impl<S, F> FnProblem<S, F>
where
    F: Fn(&S) -> Vec<Edge<S>>,
{
    /// A problem with no heuristic estimates.
    pub fn new(successors: F) -> Self {
        Self {
            successors,
            heuristic: |_| None,
            _state: std::marker::PhantomData,
        }
    }
}

impl<S, F, H> FnProblem<S, F, H>
where
    F: Fn(&S) -> Vec<Edge<S>>,
    H: Fn(&S) -> Option<f64>,
{
    /// Replace the heuristic function.
    pub fn with_heuristic<H2>(self, heuristic: H2) -> FnProblem<S, F, H2>
    where
        H2: Fn(&S) -> Option<f64>,
    {
        FnProblem {
            successors: self.successors,
            heuristic,
            _state: std::marker::PhantomData,
        }
    }
}

impl<S, F, H> SearchProblem for FnProblem<S, F, H>
where
    S: Clone + Eq + Hash + Debug,
    F: Fn(&S) -> Vec<Edge<S>>,
    H: Fn(&S) -> Option<f64>,
{
    type State = S;

    fn successors(&self, state: &S) -> Vec<Edge<S>> {
        (self.successors)(state)
    }

    fn heuristic(&self, state: &S) -> Option<f64> {
        (self.heuristic)(state)
    }
}
