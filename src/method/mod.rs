//! Search-method contract and the two built-in strategies.
//!
//! Both strategies consume an [`ObjectiveFunction`] and an [`Area`] and
//! produce a [`SearchRun`]: the best point found, its value, the number
//! of steps taken, and the path of adopted points. Methods are
//! derivative-free; they only ever call
//! [`evaluate`](ObjectiveFunction::evaluate).

mod simplex;
mod stochastic;

pub use simplex::{SimplexSearch, SimplexSearchBuilder};
pub use stochastic::{StochasticWalk, StochasticWalkBuilder};

use std::sync::Arc;

use crate::area::Area;
use crate::error::Result;
use crate::function::{Evaluation, ObjectiveFunction};
use crate::point::Point;
use crate::trace::Tracer;

/// The outcome of a single search invocation.
///
/// Each call returns a fresh `SearchRun`; the search objects themselves
/// carry no result state between calls, so a call is pure from the
/// caller's perspective.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchRun {
    /// The best point found and its value.
    pub best: Evaluation,
    /// The number of iterations performed.
    pub steps: usize,
    /// The points adopted along the way, in order, for diagnostics and
    /// visualization. Discarded between invocations.
    pub path: Vec<Point>,
}

/// Trait for interchangeable minimum-search strategies.
///
/// The core never cross-validates the [`Area`]'s dimensionality against
/// the function's; if they disagree, whatever error
/// [`evaluate`](ObjectiveFunction::evaluate) raises propagates out of the
/// search unchanged.
pub trait SearchMethod: Send + Sync {
    /// Human-readable identity, used only for reporting.
    fn name(&self) -> &str;

    /// Pins the starting point; subsequent calls reuse it.
    ///
    /// For the simplex method this seeds one vertex of a deterministic
    /// initial simplex; for the stochastic walk it seeds the incumbent.
    fn set_start(&mut self, start: Point);

    /// Replaces the tracer that receives step diagnostics.
    fn set_tracer(&mut self, tracer: Arc<dyn Tracer>);

    /// Reseeds the method's random source.
    ///
    /// Must happen-before a search that is expected to replay exactly.
    fn reseed(&self, seed: u64);

    /// Searches for a minimum, discarding the path.
    ///
    /// # Errors
    ///
    /// Propagates any evaluation error; a failed evaluation aborts the
    /// whole search.
    fn minimal(&self, function: &dyn ObjectiveFunction, area: &Area) -> Result<Evaluation> {
        Ok(self.minimal_with_path(function, area)?.best)
    }

    /// Searches for a minimum, returning the full [`SearchRun`].
    ///
    /// # Errors
    ///
    /// Propagates any evaluation error; a failed evaluation aborts the
    /// whole search.
    fn minimal_with_path(
        &self,
        function: &dyn ObjectiveFunction,
        area: &Area,
    ) -> Result<SearchRun>;
}
