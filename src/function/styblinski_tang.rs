use crate::error::{Error, Result};
use crate::function::{evaluate_catalog, Evaluation, ObjectiveFunction};
use crate::point::Point;

/// The Styblinski–Tang function (2D form, shifted),
/// `f(x, y) = (Σ xᵢ⁴ − 16xᵢ² + 5xᵢ)/2 + 80`.
///
/// A quartic-form benchmark with a single known minimum at
/// `(−2.903534, −2.903534)`. The `+80` shift keeps values positive over
/// the customary search area.
pub struct StyblinskiTang {
    minima: Vec<Evaluation>,
    maxima: Vec<Evaluation>,
}

impl StyblinskiTang {
    /// Creates the function.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDimension`] unless `dimensions` is 2.
    pub fn new(dimensions: usize) -> Result<Self> {
        if dimensions != 2 {
            return Err(Error::UnsupportedDimension {
                function: "Styblinski-Tang",
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
            vec![Point::new(vec![-2.903_534, -2.903_534])],
        )?;
        Ok(function)
    }
}

impl ObjectiveFunction for StyblinskiTang {
    fn evaluate(&self, point: &Point) -> Result<f64> {
        if point.dimensions() != 2 {
            return Err(Error::DimensionMismatch {
                expected: 2,
                got: point.dimensions(),
            });
        }
        let term = |x: f64| x.powi(4) - 16.0 * x * x + 5.0 * x;
        Ok((term(point[0]) + term(point[1])) / 2.0 + 80.0)
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
        "Styblinski-Tang function [f(x, y) = \\sum_{i=1}^{2} (x_i^4 - 16 x_i^2 + 5 x_i) / 2 + 80]"
            .to_owned()
    }
}
