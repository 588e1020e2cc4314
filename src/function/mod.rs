//! Objective-function contract and the built-in test functions.
//!
//! An [`ObjectiveFunction`] evaluates points, advertises its supported
//! dimensionality, and carries a fixed catalog of analytically known
//! minima and maxima. The catalog is never consulted during a search
//! (methods only see live evaluations); it answers "which known minimum
//! is this result closest to" for reporting.

mod himmelblau;
mod rastrigin;
mod styblinski_tang;

pub use himmelblau::Himmelblau;
pub use rastrigin::Rastrigin;
pub use styblinski_tang::StyblinskiTang;

use crate::error::{Error, Result};
use crate::point::Point;

/// A function's value at a point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// The domain point.
    pub point: Point,
    /// The function's value at that point.
    pub value: f64,
}

/// Trait for scalar multivariate objective functions.
///
/// The set of implementations is closed, since the catalog of test
/// functions is fixed at build time, but search methods depend only on
/// this trait, so the two sides stay decoupled. The trait requires
/// `Send + Sync` so that functions can be shared across independent
/// searches.
pub trait ObjectiveFunction: Send + Sync {
    /// Evaluates the function at `point`.
    ///
    /// Evaluation is pure arithmetic: cheap, deterministic, never cached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `point` has a different
    /// dimension than the function was constructed for.
    fn evaluate(&self, point: &Point) -> Result<f64>;

    /// The cataloged local minima, in fixed catalog order (not sorted).
    fn known_minima(&self) -> &[Evaluation];

    /// The cataloged local maxima, in fixed catalog order (not sorted).
    fn known_maxima(&self) -> &[Evaluation];

    /// Whether the function can be constructed for `dimensions` axes.
    fn is_dimension_supported(&self, dimensions: usize) -> bool;

    /// Human-readable identity, used only for reporting.
    fn name(&self) -> String;

    /// Returns the cataloged minimum closest to `point`.
    ///
    /// Closeness is measured in the embedded space: the point and every
    /// catalog entry are extended with their function value as an extra
    /// coordinate before taking Euclidean distances, so two results at
    /// similar positions but very different values are not considered
    /// equally close. Ties break toward the earlier catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoKnownMinima`] if the catalog is empty, or any
    /// error raised by [`evaluate`](Self::evaluate).
    fn closest_known_minimum(&self, point: &Point) -> Result<Evaluation> {
        let embedded = point.appended(self.evaluate(point)?);
        let mut closest: Option<(f64, &Evaluation)> = None;
        for entry in self.known_minima() {
            let distance = entry.point.appended(entry.value).distance_to(&embedded)?;
            let replace = match closest {
                Some((best, _)) => distance < best,
                None => true,
            };
            if replace {
                closest = Some((distance, entry));
            }
        }
        closest
            .map(|(_, entry)| entry.clone())
            .ok_or(Error::NoKnownMinima)
    }

    /// Root-mean-square embedded distance between corresponding points of
    /// two equally sized sets.
    ///
    /// Each point is extended with its function value before the distance
    /// is taken. This is the simplex method's convergence measure: it
    /// drops toward zero as successive simplexes stop moving in both
    /// position and value.
    ///
    /// # Errors
    ///
    /// Propagates evaluation and distance errors.
    ///
    /// # Panics
    ///
    /// Panics if the two slices differ in length.
    fn rms_embedded_distance(&self, before: &[Point], after: &[Point]) -> Result<f64> {
        assert_eq!(before.len(), after.len());
        if before.is_empty() {
            return Ok(0.0);
        }
        let mut sum = 0.0;
        for (a, b) in before.iter().zip(after) {
            let left = a.appended(self.evaluate(a)?);
            let right = b.appended(self.evaluate(b)?);
            let distance = left.distance_to(&right)?;
            sum += distance * distance;
        }
        #[allow(clippy::cast_precision_loss)]
        let count = before.len() as f64;
        Ok((sum / count).sqrt())
    }
}

/// Evaluates a catalog of raw points into [`Evaluation`] entries, keeping
/// catalog order.
pub(crate) fn evaluate_catalog<F: ObjectiveFunction>(
    function: &F,
    points: Vec<Point>,
) -> Result<Vec<Evaluation>> {
    points
        .into_iter()
        .map(|point| {
            let value = function.evaluate(&point)?;
            Ok(Evaluation { point, value })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_known_minimum_at_catalog_point_is_exact() {
        let function = Himmelblau::new(2).unwrap();
        for entry in function.known_minima() {
            let found = function.closest_known_minimum(&entry.point).unwrap();
            assert_eq!(&found, entry);
            assert_eq!(found.point.distance_to(&entry.point).unwrap(), 0.0);
        }
    }

    #[test]
    fn closest_known_minimum_breaks_ties_by_catalog_order() {
        let function = Himmelblau::new(2).unwrap();
        // Equidistant in the embedded space from every catalog entry only
        // happens off-catalog for contrived points; the guarantee that
        // matters is that a strict `<` keeps the first entry on exact ties.
        let query = function.known_minima()[0].point.clone();
        let found = function.closest_known_minimum(&query).unwrap();
        assert_eq!(&found, &function.known_minima()[0]);
    }

    #[test]
    fn rms_embedded_distance_is_zero_for_identical_sets() {
        let function = Himmelblau::new(2).unwrap();
        let points = vec![
            Point::new(vec![0.0, 0.0]),
            Point::new(vec![1.0, 1.0]),
            Point::new(vec![-2.0, 3.0]),
        ];
        let measure = function.rms_embedded_distance(&points, &points).unwrap();
        assert_eq!(measure, 0.0);
    }

    #[test]
    fn rms_embedded_distance_counts_value_displacement() {
        let function = Himmelblau::new(2).unwrap();
        let before = vec![Point::new(vec![0.0, 0.0])];
        let after = vec![Point::new(vec![3.0, 2.0])];
        let positional = before[0].distance_to(&after[0]).unwrap();
        let measure = function.rms_embedded_distance(&before, &after).unwrap();
        // f(0,0) = 170, f(3,2) = 0: the value axis dominates.
        assert!(measure > positional);
    }
}
