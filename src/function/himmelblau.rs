use crate::error::{Error, Result};
use crate::function::{evaluate_catalog, Evaluation, ObjectiveFunction};
use crate::point::Point;

/// Himmelblau's function, `f(x, y) = (x² + y − 11)² + (x + y² − 7)²`.
///
/// A 2D benchmark with four local minima of equal (zero) value and one
/// local maximum. The minima positions are the literature values.
///
/// # Examples
///
/// ```
/// use minima::{Himmelblau, ObjectiveFunction, Point};
///
/// let function = Himmelblau::new(2).unwrap();
/// let value = function.evaluate(&Point::new(vec![3.0, 2.0])).unwrap();
/// assert!(value.abs() < 1e-9);
/// assert_eq!(function.known_minima().len(), 4);
/// ```
pub struct Himmelblau {
    minima: Vec<Evaluation>,
    maxima: Vec<Evaluation>,
}

impl Himmelblau {
    /// Creates the function.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDimension`] unless `dimensions` is 2.
    pub fn new(dimensions: usize) -> Result<Self> {
        if dimensions != 2 {
            return Err(Error::UnsupportedDimension {
                function: "Himmelblau",
                requested: dimensions,
                min: 2,
                max: 2,
            });
        }
        let mut function = Self {
            minima: Vec::new(),
            maxima: Vec::new(),
        };
        function.minima = evaluate_catalog(
            &function,
            vec![
                Point::new(vec![3.0, 2.0]),
                Point::new(vec![-2.805_118, 3.131_312]),
                Point::new(vec![-3.779_310, -3.283_186]),
                Point::new(vec![3.584_428, -1.848_126]),
            ],
        )?;
        function.maxima =
            evaluate_catalog(&function, vec![Point::new(vec![-0.270_845, -0.923_039])])?;
        Ok(function)
    }
}

impl ObjectiveFunction for Himmelblau {
    fn evaluate(&self, point: &Point) -> Result<f64> {
        if point.dimensions() != 2 {
            return Err(Error::DimensionMismatch {
                expected: 2,
                got: point.dimensions(),
            });
        }
        let (x, y) = (point[0], point[1]);
        let a = x * x + y - 11.0;
        let b = x + y * y - 7.0;
        Ok(a * a + b * b)
    }

    fn known_minima(&self) -> &[Evaluation] {
        &self.minima
    }

    fn known_maxima(&self) -> &[Evaluation] {
        &self.maxima
    }

    fn is_dimension_supported(&self, dimensions: usize) -> bool {
        dimensions == 2
    }

    fn name(&self) -> String {
        "Himmelblau function [f(x, y) = (x^2 + y - 11)^2 + (x + y^2 - 7)^2]".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_two_dimensions_are_supported() {
        assert!(Himmelblau::new(2).is_ok());
        for n in [0, 1, 3, 5] {
            assert!(matches!(
                Himmelblau::new(n),
                Err(Error::UnsupportedDimension { .. })
            ));
        }
        let function = Himmelblau::new(2).unwrap();
        assert!(function.is_dimension_supported(2));
        assert!(!function.is_dimension_supported(3));
    }

    #[test]
    fn catalog_minima_evaluate_near_zero() {
        let function = Himmelblau::new(2).unwrap();
        for entry in function.known_minima() {
            assert!(entry.value.abs() < 1e-9, "minimum at {}", entry.point);
        }
    }

    #[test]
    fn evaluate_rejects_wrong_dimension() {
        let function = Himmelblau::new(2).unwrap();
        let point = Point::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(
            function.evaluate(&point).unwrap_err(),
            Error::DimensionMismatch {
                expected: 2,
                got: 3,
            }
        );
    }
}
