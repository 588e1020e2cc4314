//! Nelder-Mead simplex search.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::area::Area;
use crate::error::{Error, Result};
use crate::function::{Evaluation, ObjectiveFunction};
use crate::method::{SearchMethod, SearchRun};
use crate::point::Point;
use crate::random::RandomSource;
use crate::trace::{NopTracer, Tracer};

/// Deterministic simplex search (Nelder-Mead).
///
/// Maintains a simplex of `d + 1` vertices in `d`-dimensional space and
/// repeatedly reflects, expands, contracts, or shrinks it toward lower
/// function values. The search terminates when the root-mean-square
/// embedded displacement of a full iteration drops below the tolerance.
///
/// There is no hard iteration cap: a landscape that keeps the simplex
/// moving above the tolerance keeps the search running. Callers who need
/// a bound should pick the stochastic method instead.
///
/// # Examples
///
/// ```
/// use minima::{Area, Himmelblau, Point, SearchMethod, SimplexSearch};
///
/// let function = Himmelblau::new(2).unwrap();
/// let area = Area::cube(2, -5.0, 5.0).unwrap();
/// let mut method = SimplexSearch::new();
/// method.set_start(Point::new(vec![0.0, 0.0]));
///
/// let best = method.minimal(&function, &area).unwrap();
/// assert!(best.value < 1.0);
/// ```
pub struct SimplexSearch {
    tolerance: f64,
    alpha: f64, // reflection
    gamma: f64, // expansion
    rho: f64,   // contraction
    sigma: f64, // shrink
    edge: f64,  // seeded-simplex edge length
    start: Option<Point>,
    tracer: Arc<dyn Tracer>,
    rng: Mutex<RandomSource>,
}

impl SimplexSearch {
    /// Creates a search with default coefficients and an entropy-seeded
    /// random source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tolerance: 0.01,
            alpha: 1.0,
            gamma: 2.0,
            rho: 0.5,
            sigma: 0.5,
            edge: 1.0,
            start: None,
            tracer: Arc::new(NopTracer),
            rng: Mutex::new(RandomSource::new()),
        }
    }

    /// Creates a search with default coefficients and a fixed seed.
    ///
    /// The seed only matters when no start is pinned, since a pinned start
    /// produces a fully deterministic initial simplex.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let search = Self::new();
        search.reseed(seed);
        search
    }

    /// Returns a builder for customizing coefficients.
    #[must_use]
    pub fn builder() -> SimplexSearchBuilder {
        SimplexSearchBuilder::new()
    }

    fn initial_simplex(
        &self,
        function: &dyn ObjectiveFunction,
        area: &Area,
    ) -> Result<Vec<Evaluation>> {
        let vertices = match &self.start {
            Some(start) => {
                let mut vertices = vec![start.clone()];
                for axis in 0..start.dimensions() {
                    let mut coords = start.as_slice().to_vec();
                    coords[axis] += self.edge;
                    vertices.push(Point::new(coords));
                }
                vertices
            }
            None => {
                let mut rng = self.rng.lock();
                (0..=area.dimensions())
                    .map(|_| area.random_point(&mut rng))
                    .collect()
            }
        };
        vertices
            .into_iter()
            .map(|point| {
                let value = function.evaluate(&point)?;
                Ok(Evaluation { point, value })
            })
            .collect()
    }
}

impl Default for SimplexSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchMethod for SimplexSearch {
    fn name(&self) -> &str {
        "Nelder-Mead simplex search"
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
        let mut simplex = self.initial_simplex(function, area)?;
        let mut steps = 0_usize;
        let mut path: Vec<Point> = Vec::new();

        loop {
            // 1. Order ascending by value. Best, second-worst, and worst
            // are always taken from this freshly sorted state.
            simplex.sort_by(|a, b| a.value.total_cmp(&b.value));
            let previous: Vec<Point> = simplex.iter().map(|e| e.point.clone()).collect();

            let worst = simplex.len() - 1;
            let second_worst = worst.saturating_sub(1);

            // 2. Centroid of all vertices except the worst.
            let centroid = centroid(&simplex[..worst])?;

            // 3. Reflection.
            let direction = centroid.try_sub(&simplex[worst].point)?;
            let reflected = centroid.try_add(&(direction * self.alpha))?;
            let reflected_value = function.evaluate(&reflected)?;

            if simplex[0].value <= reflected_value && reflected_value < simplex[second_worst].value
            {
                replace_worst(&mut simplex, &mut path, reflected, reflected_value);
            } else if reflected_value < simplex[0].value {
                // 4. Expansion.
                let stretch = reflected.try_sub(&centroid)?;
                let expanded = centroid.try_add(&(stretch * self.gamma))?;
                let expanded_value = function.evaluate(&expanded)?;
                if expanded_value < reflected_value {
                    replace_worst(&mut simplex, &mut path, expanded, expanded_value);
                } else {
                    replace_worst(&mut simplex, &mut path, reflected, reflected_value);
                }
            } else {
                // 5. Contraction, toward the reflected point when it beats
                // the worst vertex and toward the worst vertex otherwise.
                let target = if reflected_value < simplex[worst].value {
                    &reflected
                } else {
                    &simplex[worst].point
                };
                let pull = target.try_sub(&centroid)?;
                let contracted = centroid.try_add(&(pull * self.rho))?;
                let contracted_value = function.evaluate(&contracted)?;
                if contracted_value < reflected_value {
                    replace_worst(&mut simplex, &mut path, contracted, contracted_value);
                } else {
                    // 6. Shrink every non-best vertex toward the best.
                    let best_point = simplex[0].point.clone();
                    for vertex in simplex.iter_mut().skip(1) {
                        let toward = vertex.point.try_sub(&best_point)?;
                        vertex.point = best_point.try_add(&(toward * self.sigma))?;
                        vertex.value = function.evaluate(&vertex.point)?;
                    }
                    record(&mut path, &simplex[worst].point);
                }
            }

            steps += 1;
            let current: Vec<Point> = simplex.iter().map(|e| e.point.clone()).collect();
            let measure = function.rms_embedded_distance(&previous, &current)?;
            self.tracer
                .debug(&format!("step {steps}: simplex displacement {measure:e}"));

            if measure < self.tolerance {
                let best = simplex
                    .iter()
                    .min_by(|a, b| a.value.total_cmp(&b.value))
                    .cloned()
                    .ok_or(Error::Internal("simplex lost its vertices"))?;
                self.tracer.info(&format!(
                    "converged to {} (value {}) after {steps} steps",
                    best.point, best.value
                ));
                return Ok(SearchRun { best, steps, path });
            }
        }
    }
}

fn centroid(vertices: &[Evaluation]) -> Result<Point> {
    let first = vertices
        .first()
        .ok_or(Error::Internal("centroid of an empty vertex set"))?;
    let mut sum = first.point.clone();
    for vertex in &vertices[1..] {
        sum = sum.try_add(&vertex.point)?;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = vertices.len() as f64;
    Ok(sum / count)
}

fn replace_worst(simplex: &mut [Evaluation], path: &mut Vec<Point>, point: Point, value: f64) {
    record(path, &point);
    let worst = simplex.len() - 1;
    simplex[worst] = Evaluation { point, value };
}

fn record(path: &mut Vec<Point>, point: &Point) {
    if path.last() != Some(point) {
        path.push(point.clone());
    }
}

/// Builder for [`SimplexSearch`].
///
/// Defaults: tolerance `0.01`, reflection `alpha = 1`, expansion
/// `gamma = 2`, contraction `rho = 0.5`, shrink `sigma = 0.5`, seeded
/// simplex edge length `1.0`. Coefficient ranges are validated at
/// [`build`](Self::build) time.
pub struct SimplexSearchBuilder {
    tolerance: f64,
    alpha: f64,
    gamma: f64,
    rho: f64,
    sigma: f64,
    edge: f64,
    start: Option<Point>,
    seed: Option<u64>,
    tracer: Arc<dyn Tracer>,
}

impl SimplexSearchBuilder {
    /// Creates a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tolerance: 0.01,
            alpha: 1.0,
            gamma: 2.0,
            rho: 0.5,
            sigma: 0.5,
            edge: 1.0,
            start: None,
            seed: None,
            tracer: Arc::new(NopTracer),
        }
    }

    /// Sets the convergence tolerance (must be positive).
    #[must_use]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the reflection coefficient `alpha` (must be positive).
    #[must_use]
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the expansion coefficient `gamma` (must exceed 1).
    #[must_use]
    pub fn gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Sets the contraction coefficient `rho` (must be in `(0, 0.5]`).
    #[must_use]
    pub fn rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    /// Sets the shrink coefficient `sigma` (must be in `(0, 1)`).
    #[must_use]
    pub fn sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    /// Sets the edge length of the deterministic simplex built around a
    /// pinned start (must be positive).
    #[must_use]
    pub fn edge(mut self, edge: f64) -> Self {
        self.edge = edge;
        self
    }

    /// Pins the starting vertex.
    #[must_use]
    pub fn start(mut self, start: Point) -> Self {
        self.start = Some(start);
        self
    }

    /// Seeds the random source used for unseeded initial simplexes.
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

    /// Builds the search.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoefficient`] if any coefficient is outside
    /// its documented range.
    pub fn build(self) -> Result<SimplexSearch> {
        check(self.tolerance > 0.0, "tolerance", self.tolerance, "tolerance > 0")?;
        check(self.alpha > 0.0, "alpha", self.alpha, "alpha > 0")?;
        check(self.gamma > 1.0, "gamma", self.gamma, "gamma > 1")?;
        check(
            self.rho > 0.0 && self.rho <= 0.5,
            "rho",
            self.rho,
            "0 < rho <= 0.5",
        )?;
        check(
            self.sigma > 0.0 && self.sigma < 1.0,
            "sigma",
            self.sigma,
            "0 < sigma < 1",
        )?;
        check(self.edge > 0.0, "edge", self.edge, "edge > 0")?;
        let rng = match self.seed {
            Some(seed) => RandomSource::with_seed(seed),
            None => RandomSource::new(),
        };
        Ok(SimplexSearch {
            tolerance: self.tolerance,
            alpha: self.alpha,
            gamma: self.gamma,
            rho: self.rho,
            sigma: self.sigma,
            edge: self.edge,
            start: self.start,
            tracer: self.tracer,
            rng: Mutex::new(rng),
        })
    }
}

impl Default for SimplexSearchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn check(ok: bool, name: &'static str, value: f64, requirement: &'static str) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(Error::InvalidCoefficient {
            name,
            value,
            requirement,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::Himmelblau;

    fn himmelblau_setup() -> (Himmelblau, Area) {
        let function = Himmelblau::new(2).unwrap();
        let area = Area::cube(2, -5.0, 5.0).unwrap();
        (function, area)
    }

    #[test]
    fn converges_near_a_catalog_minimum_from_the_origin() {
        let (function, area) = himmelblau_setup();
        let mut method = SimplexSearch::builder()
            .tolerance(1e-9)
            .build()
            .unwrap();
        method.set_start(Point::new(vec![0.0, 0.0]));

        let run = method.minimal_with_path(&function, &area).unwrap();
        let nearest = function.closest_known_minimum(&run.best.point).unwrap();
        assert!(
            (run.best.value - nearest.value).abs() < 1e-3,
            "value {} is not within 1e-3 of catalog value {}",
            run.best.value,
            nearest.value
        );
        assert!(run.steps > 0);
        assert!(!run.path.is_empty());
    }

    #[test]
    fn pinned_start_makes_runs_identical() {
        let (function, area) = himmelblau_setup();
        let mut method = SimplexSearch::with_seed(42);
        method.set_start(Point::new(vec![1.0, 1.0]));

        method.reseed(42);
        let first = method.minimal(&function, &area).unwrap();
        method.reseed(42);
        let second = method.minimal(&function, &area).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn random_simplex_stays_reproducible_per_seed() {
        let (function, area) = himmelblau_setup();
        let method = SimplexSearch::with_seed(7);
        method.reseed(7);
        let first = method.minimal(&function, &area).unwrap();
        method.reseed(7);
        let second = method.minimal(&function, &area).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn builder_rejects_out_of_range_coefficients() {
        assert!(matches!(
            SimplexSearch::builder().alpha(0.0).build(),
            Err(Error::InvalidCoefficient { name: "alpha", .. })
        ));
        assert!(matches!(
            SimplexSearch::builder().gamma(1.0).build(),
            Err(Error::InvalidCoefficient { name: "gamma", .. })
        ));
        assert!(matches!(
            SimplexSearch::builder().rho(0.6).build(),
            Err(Error::InvalidCoefficient { name: "rho", .. })
        ));
        assert!(matches!(
            SimplexSearch::builder().sigma(1.0).build(),
            Err(Error::InvalidCoefficient { name: "sigma", .. })
        ));
    }

    #[test]
    fn path_records_replaced_vertices_without_consecutive_duplicates() {
        let (function, area) = himmelblau_setup();
        let mut method = SimplexSearch::builder().tolerance(1e-6).build().unwrap();
        method.set_start(Point::new(vec![-1.0, 2.5]));

        let run = method.minimal_with_path(&function, &area).unwrap();
        for pair in run.path.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }
}
