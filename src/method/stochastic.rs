//! Stochastic walk with local exploitation.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::area::Area;
use crate::error::{Error, Result};
use crate::function::{Evaluation, ObjectiveFunction};
use crate::method::{SearchMethod, SearchRun};
use crate::point::Point;
use crate::random::RandomSource;
use crate::trace::{NopTracer, Tracer};

/// Stochastic search alternating global exploration and local
/// exploitation.
///
/// Keeps a running incumbent best. Each iteration either perturbs the
/// incumbent within a small radius (with the exploitation probability) or
/// draws a fresh uniform point from the whole area, and adopts the
/// candidate on strict improvement. The walk exits early once an
/// incumbent-vs-candidate value delta falls below the tolerance (never
/// before the minimum iteration floor) and otherwise stops at the
/// iteration cap.
///
/// # Examples
///
/// ```
/// use minima::{Area, Rastrigin, SearchMethod, StochasticWalk};
///
/// let function = Rastrigin::new(2).unwrap();
/// let area = Area::cube(2, -5.12, 5.12).unwrap();
/// let method = StochasticWalk::with_seed(42);
///
/// let run = method.minimal_with_path(&function, &area).unwrap();
/// assert!(run.steps >= 100);
/// assert!(run.best.value < 10.0);
/// ```
pub struct StochasticWalk {
    tolerance: f64,
    min_iterations: usize,
    max_iterations: usize,
    perturbation_radius: f64,
    exploit_probability: f64,
    start: Option<Point>,
    tracer: Arc<dyn Tracer>,
    rng: Mutex<RandomSource>,
}

impl StochasticWalk {
    /// Creates a walk with default parameters and an entropy-seeded random
    /// source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tolerance: 1e-5,
            min_iterations: 100,
            max_iterations: 10_000,
            perturbation_radius: 0.1,
            exploit_probability: 0.5,
            start: None,
            tracer: Arc::new(NopTracer),
            rng: Mutex::new(RandomSource::new()),
        }
    }

    /// Creates a walk with default parameters and a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let walk = Self::new();
        walk.reseed(seed);
        walk
    }

    /// Returns a builder for customizing parameters.
    #[must_use]
    pub fn builder() -> StochasticWalkBuilder {
        StochasticWalkBuilder::new()
    }
}

impl Default for StochasticWalk {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchMethod for StochasticWalk {
    fn name(&self) -> &str {
        "stochastic walk"
    }

    fn set_start(&mut self, start: Point) {
        self.start = Some(start);
    }

    fn set_tracer(&mut self, tracer: Arc<dyn Tracer>) {
        self.tracer = tracer;
    }

    fn reseed(&self, seed: u64) {
        self.rng.lock().reseed(seed);
    }

    fn minimal_with_path(
        &self,
        function: &dyn ObjectiveFunction,
        area: &Area,
    ) -> Result<SearchRun> {
        let mut rng = self.rng.lock();
        let mut steps = 0_usize;
        let mut path: Vec<Point> = Vec::new();

        let mut incumbent: Option<Evaluation> = match &self.start {
            Some(start) => {
                let value = function.evaluate(start)?;
                path.push(start.clone());
                Some(Evaluation {
                    point: start.clone(),
                    value,
                })
            }
            None => None,
        };

        for iteration in 1..self.max_iterations {
            steps += 1;

            let candidate = match &incumbent {
                Some(best) if rng.chance(self.exploit_probability) => best
                    .point
                    .perturbed(&mut rng, self.perturbation_radius),
                _ => area.random_point(&mut rng),
            };
            let value = function.evaluate(&candidate)?;

            let Some(best) = &incumbent else {
                self.tracer.info(&format!(
                    "{candidate}, value {value}, on iteration #{iteration}"
                ));
                path.push(candidate.clone());
                incumbent = Some(Evaluation {
                    point: candidate,
                    value,
                });
                continue;
            };

            if (best.value - value).abs() < self.tolerance && iteration >= self.min_iterations {
                self.tracer.info(&format!(
                    "exiting on value delta below tolerance, on iteration #{iteration}"
                ));
                return Ok(SearchRun {
                    best: best.clone(),
                    steps,
                    path,
                });
            }

            if value < best.value {
                self.tracer.info(&format!(
                    "{candidate}, value {value}, on iteration #{iteration}"
                ));
                path.push(candidate.clone());
                incumbent = Some(Evaluation {
                    point: candidate,
                    value,
                });
            }
        }

        self.tracer.info("exiting on iteration cap");
        incumbent
            .map(|best| SearchRun { best, steps, path })
            .ok_or(Error::Internal(
                "stochastic walk finished without evaluating any candidate",
            ))
    }
}

/// Builder for [`StochasticWalk`].
///
/// Defaults: tolerance `1e-5`, iteration floor `100`, iteration cap
/// `10000`, perturbation radius `0.1`, exploitation probability `0.5`.
pub struct StochasticWalkBuilder {
    tolerance: f64,
    min_iterations: usize,
    max_iterations: usize,
    perturbation_radius: f64,
    exploit_probability: f64,
    start: Option<Point>,
    seed: Option<u64>,
    tracer: Arc<dyn Tracer>,
}

impl StochasticWalkBuilder {
    /// Creates a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tolerance: 1e-5,
            min_iterations: 100,
            max_iterations: 10_000,
            perturbation_radius: 0.1,
            exploit_probability: 0.5,
            start: None,
            seed: None,
            tracer: Arc::new(NopTracer),
        }
    }

    /// Sets the tolerance on successive best-value deltas (must be
    /// positive).
    #[must_use]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the iteration floor: the walk never exits on tolerance before
    /// this many iterations.
    #[must_use]
    pub fn min_iterations(mut self, min_iterations: usize) -> Self {
        self.min_iterations = min_iterations;
        self
    }

    /// Sets the iteration cap (must be at least the floor).
    #[must_use]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the local-perturbation radius used for exploitation steps
    /// (must be positive).
    #[must_use]
    pub fn perturbation_radius(mut self, perturbation_radius: f64) -> Self {
        self.perturbation_radius = perturbation_radius;
        self
    }

    /// Sets the probability of exploiting the incumbent instead of
    /// exploring the whole area (must be in `[0, 1]`).
    #[must_use]
    pub fn exploit_probability(mut self, exploit_probability: f64) -> Self {
        self.exploit_probability = exploit_probability;
        self
    }

    /// Pins the initial incumbent.
    #[must_use]
    pub fn start(mut self, start: Point) -> Self {
        self.start = Some(start);
        self
    }

    /// Seeds the random source for reproducibility.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Installs a tracer for step diagnostics.
    #[must_use]
    pub fn tracer(mut self, tracer: Arc<dyn Tracer>) -> Self {
        self.tracer = tracer;
        self
    }

    /// Builds the walk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoefficient`] if any parameter is outside
    /// its documented range.
    pub fn build(self) -> Result<StochasticWalk> {
        if self.tolerance <= 0.0 {
            return Err(Error::InvalidCoefficient {
                name: "tolerance",
                value: self.tolerance,
                requirement: "tolerance > 0",
            });
        }
        if self.min_iterations > self.max_iterations {
            #[allow(clippy::cast_precision_loss)]
            let value = self.min_iterations as f64;
            return Err(Error::InvalidCoefficient {
                name: "min_iterations",
                value,
                requirement: "min_iterations <= max_iterations",
            });
        }
        if self.perturbation_radius <= 0.0 {
            return Err(Error::InvalidCoefficient {
                name: "perturbation_radius",
                value: self.perturbation_radius,
                requirement: "perturbation_radius > 0",
            });
        }
        if !(0.0..=1.0).contains(&self.exploit_probability) {
            return Err(Error::InvalidCoefficient {
                name: "exploit_probability",
                value: self.exploit_probability,
                requirement: "0 <= exploit_probability <= 1",
            });
        }
        let rng = match self.seed {
            Some(seed) => RandomSource::with_seed(seed),
            None => RandomSource::new(),
        };
        Ok(StochasticWalk {
            tolerance: self.tolerance,
            min_iterations: self.min_iterations,
            max_iterations: self.max_iterations,
            perturbation_radius: self.perturbation_radius,
            exploit_probability: self.exploit_probability,
            start: self.start,
            tracer: self.tracer,
            rng: Mutex::new(rng),
        })
    }
}

impl Default for StochasticWalkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
