#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Derivative-free minimization of multivariate test functions over
//! bounded areas, with two interchangeable search strategies and
//! nearest-known-minimum attribution.
//!
//! # Getting Started
//!
//! Find a minimum of Himmelblau's function in a few lines:
//!
//! ```
//! use minima::prelude::*;
//!
//! let function = Himmelblau::new(2)?;
//! let area = Area::cube(2, -5.0, 5.0)?;
//!
//! let method = SimplexSearch::builder()
//!     .tolerance(1e-9)
//!     .start(Point::new(vec![0.0, 0.0]))
//!     .build()?;
//!
//! let best = method.minimal(&function, &area)?;
//! let nearest = function.closest_known_minimum(&best.point)?;
//! assert!((best.value - nearest.value).abs() < 1e-3);
//! # Ok::<(), minima::Error>(())
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Point`] | An n-dimensional value type with arithmetic, distance, and perturbation. |
//! | [`Area`] | An axis-aligned bounded box: membership, uniform sampling, corner enumeration. |
//! | [`ObjectiveFunction`] | Evaluate a point, enumerate known minima/maxima, attribute a result to its nearest cataloged minimum. |
//! | [`SearchMethod`] | Strategy for locating a minimum: [`SimplexSearch`] (Nelder-Mead) or [`StochasticWalk`]. |
//! | [`SearchRun`] | One invocation's outcome: best point, value, step count, visited path. |
//! | [`RandomSource`] | A reseedable uniform generator, injected rather than global. |
//! | [`Tracer`] | Optional per-step logging sink, no-op by default. |
//!
//! Both methods are derivative-free local searches: they can converge to
//! any local minimum, and neither promises the global one.
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on the public value types | off |
//! | `tracing` | [`TracingTracer`](trace::TracingTracer), forwarding step diagnostics to [`tracing`](https://docs.rs/tracing) | off |

mod area;
mod error;
pub mod function;
pub mod method;
mod point;
mod random;
pub mod trace;

pub use area::Area;
pub use error::{Error, Result};
pub use function::{Evaluation, Himmelblau, ObjectiveFunction, Rastrigin, StyblinskiTang};
pub use method::{SearchMethod, SearchRun, SimplexSearch, StochasticWalk};
pub use point::Point;
pub use random::RandomSource;
pub use trace::{NopTracer, Tracer};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use minima::prelude::*;
/// ```
pub mod prelude {
    pub use crate::area::Area;
    pub use crate::error::{Error, Result};
    pub use crate::function::{
        Evaluation, Himmelblau, ObjectiveFunction, Rastrigin, StyblinskiTang,
    };
    pub use crate::method::{
        SearchMethod, SearchRun, SimplexSearch, SimplexSearchBuilder, StochasticWalk,
        StochasticWalkBuilder,
    };
    pub use crate::point::Point;
    pub use crate::random::RandomSource;
    pub use crate::trace::{NopTracer, Tracer};
}
