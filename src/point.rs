//! N-dimensional points with arithmetic and distance operations.

use core::fmt;
use core::ops::{Div, Index, Mul, Neg};

use crate::error::{Error, Result};
use crate::random::RandomSource;

/// An ordered, fixed-length sequence of real coordinates.
///
/// `Point` is a plain value type: created freely, copied freely, never
/// shared. Binary operations between two points require equal dimension
/// and return [`Error::DimensionMismatch`] otherwise; there is no silent
/// truncation. Scalar operations (`* f64`, `/ f64`, unary `-`) cannot
/// change the dimension and are infallible operators.
///
/// # Examples
///
/// ```
/// use minima::Point;
///
/// let a = Point::new(vec![1.0, 2.0]);
/// let b = Point::new(vec![4.0, 6.0]);
/// assert_eq!(a.distance_to(&b).unwrap(), 5.0);
/// assert_eq!(a.try_add(&b).unwrap(), Point::new(vec![5.0, 8.0]));
/// assert_eq!(b * 0.5, Point::new(vec![2.0, 3.0]));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    coords: Vec<f64>,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub fn new(coords: Vec<f64>) -> Self {
        Self { coords }
    }

    /// Creates a point with `dimensions` coordinates all equal to `value`.
    #[must_use]
    pub fn repeat(dimensions: usize, value: f64) -> Self {
        Self {
            coords: vec![value; dimensions],
        }
    }

    /// Returns the number of coordinates.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.coords.len()
    }

    /// Returns the coordinates as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.coords
    }

    /// Iterates over the coordinates.
    pub fn iter(&self) -> core::slice::Iter<'_, f64> {
        self.coords.iter()
    }

    /// Component-wise sum of two points of equal dimension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn try_add(&self, other: &Point) -> Result<Point> {
        self.check_dimensions(other)?;
        Ok(Point {
            coords: self
                .coords
                .iter()
                .zip(&other.coords)
                .map(|(a, b)| a + b)
                .collect(),
        })
    }

    /// Component-wise difference of two points of equal dimension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn try_sub(&self, other: &Point) -> Result<Point> {
        self.check_dimensions(other)?;
        Ok(Point {
            coords: self
                .coords
                .iter()
                .zip(&other.coords)
                .map(|(a, b)| a - b)
                .collect(),
        })
    }

    /// Euclidean distance to another point of equal dimension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn distance_to(&self, other: &Point) -> Result<f64> {
        self.check_dimensions(other)?;
        let sum: f64 = self
            .coords
            .iter()
            .zip(&other.coords)
            .map(|(a, b)| (a - b) * (a - b))
            .sum();
        Ok(sum.sqrt())
    }

    /// Returns a copy with `value` appended as an extra coordinate.
    ///
    /// Embedding a function value alongside its domain point this way lets
    /// "close in value" contribute to "close" judgments alongside "close
    /// in position".
    #[must_use]
    pub fn appended(&self, value: f64) -> Point {
        let mut coords = self.coords.clone();
        coords.push(value);
        Point { coords }
    }

    /// Returns a copy with the last coordinate removed.
    ///
    /// Inverse of [`appended`](Self::appended). A point with no
    /// coordinates is returned unchanged.
    #[must_use]
    pub fn truncated(&self) -> Point {
        let mut coords = self.coords.clone();
        coords.pop();
        Point { coords }
    }

    /// Returns a copy with every coordinate displaced uniformly within
    /// `±delta`.
    #[must_use]
    pub fn perturbed(&self, rng: &mut RandomSource, delta: f64) -> Point {
        Point {
            coords: self
                .coords
                .iter()
                .map(|c| c + rng.uniform(-delta, delta))
                .collect(),
        }
    }

    fn check_dimensions(&self, other: &Point) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                got: other.dimensions(),
            });
        }
        Ok(())
    }
}

impl From<Vec<f64>> for Point {
    fn from(coords: Vec<f64>) -> Self {
        Self { coords }
    }
}

impl Index<usize> for Point {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.coords[index]
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, factor: f64) -> Point {
        Point {
            coords: self.coords.into_iter().map(|c| c * factor).collect(),
        }
    }
}

impl Mul<f64> for &Point {
    type Output = Point;

    fn mul(self, factor: f64) -> Point {
        Point {
            coords: self.coords.iter().map(|c| c * factor).collect(),
        }
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, divisor: f64) -> Point {
        self * (1.0 / divisor)
    }
}

impl Div<f64> for &Point {
    type Output = Point;

    fn div(self, divisor: f64) -> Point {
        self * (1.0 / divisor)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        self * -1.0
    }
}

impl Neg for &Point {
    type Output = Point;

    fn neg(self) -> Point {
        self * -1.0
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}
