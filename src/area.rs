//! Axis-aligned bounded search areas.

use core::fmt;

use crate::error::{Error, Result};
use crate::point::Point;
use crate::random::RandomSource;

/// An axis-aligned box in n-dimensional space.
///
/// Constructed once per experiment and immutable afterwards. The bounds
/// must agree on dimension and be non-empty; `min[i] <= max[i]` is the
/// caller's responsibility and is not enforced.
///
/// # Examples
///
/// ```
/// use minima::{Area, Point, RandomSource};
///
/// let area = Area::cube(2, -5.0, 5.0).unwrap();
/// let mut rng = RandomSource::with_seed(42);
/// let point = area.random_point(&mut rng);
/// assert!(area.contains(&point).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Area {
    min: Point,
    max: Point,
}

impl Area {
    /// Creates an area from its lower and upper corner points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the corners disagree on
    /// dimension and [`Error::EmptyArea`] if they have zero dimensions.
    pub fn new(min: Point, max: Point) -> Result<Self> {
        if min.dimensions() != max.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: min.dimensions(),
                got: max.dimensions(),
            });
        }
        if min.dimensions() == 0 {
            return Err(Error::EmptyArea);
        }
        Ok(Self { min, max })
    }

    /// Creates a uniform cube: `dimensions` axes, each bounded by
    /// `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyArea`] if `dimensions` is zero.
    pub fn cube(dimensions: usize, min: f64, max: f64) -> Result<Self> {
        Self::new(
            Point::repeat(dimensions, min),
            Point::repeat(dimensions, max),
        )
    }

    /// Returns the number of dimensions.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.min.dimensions()
    }

    /// Returns the lower corner.
    #[must_use]
    pub fn min(&self) -> &Point {
        &self.min
    }

    /// Returns the upper corner.
    #[must_use]
    pub fn max(&self) -> &Point {
        &self.max
    }

    /// Tests whether `point` lies within the bounds (inclusive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `point` is from another
    /// dimension.
    pub fn contains(&self, point: &Point) -> Result<bool> {
        if point.dimensions() != self.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                got: point.dimensions(),
            });
        }
        Ok(self
            .min
            .iter()
            .zip(self.max.iter())
            .zip(point.iter())
            .all(|((lo, hi), c)| lo <= c && c <= hi))
    }

    /// Draws a point uniformly at random within the bounds.
    pub fn random_point(&self, rng: &mut RandomSource) -> Point {
        Point::new(
            self.min
                .iter()
                .zip(self.max.iter())
                .map(|(lo, hi)| rng.uniform(*lo, *hi))
                .collect(),
        )
    }

    /// Enumerates the 2^n corner vertices of the box.
    ///
    /// The result grows exponentially with the dimension; intended for
    /// low-dimensional rendering and catalog construction.
    #[must_use]
    pub fn corner_vertices(&self) -> Vec<Point> {
        let mut points = vec![Point::new(Vec::new())];
        for axis in 0..self.dimensions() {
            let mut next = Vec::with_capacity(points.len() * 2);
            for point in &points {
                next.push(point.appended(self.min[axis]));
                next.push(point.appended(self.max[axis]));
            }
            points = next;
        }
        points
    }

    /// Maps a coordinate value on `axis` to its fractional position in
    /// `[0, 1]` between the bounds.
    ///
    /// Values outside the bounds map outside `[0, 1]`; used by external
    /// renderers, not by the search methods.
    #[must_use]
    pub fn to_fraction(&self, axis: usize, value: f64) -> f64 {
        (value - self.min[axis]) / (self.max[axis] - self.min[axis])
    }

    /// Maps a fractional position in `[0, 1]` back to a coordinate value
    /// on `axis`. Inverse of [`to_fraction`](Self::to_fraction).
    #[must_use]
    pub fn from_fraction(&self, axis: usize, fraction: f64) -> f64 {
        self.min[axis] + fraction * (self.max[axis] - self.min[axis])
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for axis in 0..self.dimensions() {
            if axis != 0 {
                write!(f, " x ")?;
            }
            write!(f, "[{}, {}]", self.min[axis], self.max[axis])?;
        }
        Ok(())
    }
}
