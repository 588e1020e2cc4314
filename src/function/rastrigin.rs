use core::f64::consts::PI;

use crate::area::Area;
use crate::error::{Error, Result};
use crate::function::{evaluate_catalog, Evaluation, ObjectiveFunction};
use crate::point::Point;

/// Coordinate of the local maxima ring nearest the customary domain edge.
const MAXIMUM_COORDINATE: f64 = 4.522_993_666_666_6;

/// The Rastrigin function, `f(x) = 10n + Σ(xᵢ² − 10·cos(2πxᵢ))`.
///
/// Highly oscillatory with one global minimum at the origin. Supported for
/// 1 to 16 dimensions; the maxima catalog enumerates the 2^n sign
/// combinations of `±4.5229936666666`, which is why the dimension is kept
/// small.
pub struct Rastrigin {
    dimensions: usize,
    minima: Vec<Evaluation>,
    maxima: Vec<Evaluation>,
}

impl Rastrigin {
    /// Smallest supported dimensionality.
    pub const MIN_DIMENSIONS: usize = 1;
    /// Largest supported dimensionality.
    pub const MAX_DIMENSIONS: usize = 16;

    /// Creates the function for the given number of dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDimension`] unless `dimensions` is
    /// within `1..=16`.
    pub fn new(dimensions: usize) -> Result<Self> {
        if !(Self::MIN_DIMENSIONS..=Self::MAX_DIMENSIONS).contains(&dimensions) {
            return Err(Error::UnsupportedDimension {
                function: "Rastrigin",
                requested: dimensions,
                min: Self::MIN_DIMENSIONS,
                max: Self::MAX_DIMENSIONS,
            });
        }
        let mut function = Self {
            dimensions,
            minima: Vec::new(),
            maxima: Vec::new(),
        };
        function.minima =
            evaluate_catalog(&function, vec![Point::repeat(dimensions, 0.0)])?;
        let corners =
            Area::cube(dimensions, -MAXIMUM_COORDINATE, MAXIMUM_COORDINATE)?.corner_vertices();
        function.maxima = evaluate_catalog(&function, corners)?;
        Ok(function)
    }
}

impl ObjectiveFunction for Rastrigin {
    fn evaluate(&self, point: &Point) -> Result<f64> {
        const A: f64 = 10.0;
        if point.dimensions() != self.dimensions {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions,
                got: point.dimensions(),
            });
        }
        #[allow(clippy::cast_precision_loss)]
        let mut value = A * self.dimensions as f64;
        for x in point.iter() {
            value += x * x - A * (2.0 * PI * x).cos();
        }
        Ok(value)
    }

    fn known_minima(&self) -> &[Evaluation] {
        &self.minima
    }

    fn known_maxima(&self) -> &[Evaluation] {
        &self.maxima
    }

    fn is_dimension_supported(&self, dimensions: usize) -> bool {
        dimensions == self.dimensions
    }

    fn name(&self) -> String {
        format!(
            "Rastrigin function [f(x) = 10n + \\sum_{{i=1}}^{{{}}} (x_i^2 - 10 cos(2 \\pi x_i))]",
            self.dimensions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_bounds_are_enforced() {
        assert!(matches!(
            Rastrigin::new(0),
            Err(Error::UnsupportedDimension { .. })
        ));
        assert!(matches!(
            Rastrigin::new(17),
            Err(Error::UnsupportedDimension { .. })
        ));
        assert!(Rastrigin::new(1).is_ok());
        assert!(Rastrigin::new(16).is_ok());
    }

    #[test]
    fn global_minimum_is_at_the_origin() {
        for n in [1, 2, 5] {
            let function = Rastrigin::new(n).unwrap();
            let value = function.evaluate(&Point::repeat(n, 0.0)).unwrap();
            assert!(value.abs() < 1e-10);
            assert_eq!(function.known_minima().len(), 1);
            assert_eq!(function.known_minima()[0].point, Point::repeat(n, 0.0));
        }
    }

    #[test]
    fn maxima_catalog_covers_every_sign_combination() {
        let function = Rastrigin::new(3).unwrap();
        assert_eq!(function.known_maxima().len(), 8);
        for entry in function.known_maxima() {
            for c in entry.point.iter() {
                assert!((c.abs() - MAXIMUM_COORDINATE).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn maxima_dominate_nearby_values() {
        let function = Rastrigin::new(2).unwrap();
        let peak = &function.known_maxima()[0];
        let mut rng = crate::random::RandomSource::with_seed(5);
        for _ in 0..50 {
            let nearby = peak.point.perturbed(&mut rng, 0.05);
            let value = function.evaluate(&nearby).unwrap();
            assert!(value <= peak.value + 1e-6);
        }
    }
}
