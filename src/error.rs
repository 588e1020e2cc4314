#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Returned when an operation mixes points, areas, or functions of
    /// differing dimensionality.
    #[error("dimension mismatch: expected {expected} dimensions but got {got}")]
    DimensionMismatch {
        /// The expected number of dimensions.
        expected: usize,
        /// The actual number of dimensions.
        got: usize,
    },

    /// Returned when a function is constructed for a dimensionality it
    /// cannot evaluate.
    #[error("{function}: dimension {requested} is unsupported, supported range is {min}..={max}")]
    UnsupportedDimension {
        /// The name of the function being constructed.
        function: &'static str,
        /// The requested number of dimensions.
        requested: usize,
        /// The smallest supported dimensionality.
        min: usize,
        /// The largest supported dimensionality.
        max: usize,
    },

    /// Returned when an area is constructed with zero dimensions.
    #[error("area must have at least one dimension")]
    EmptyArea,

    /// Returned when a search-method coefficient is outside its valid range.
    #[error("invalid {name}: {value} must satisfy {requirement}")]
    InvalidCoefficient {
        /// The name of the coefficient.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// The range the coefficient must satisfy.
        requirement: &'static str,
    },

    /// Returned when minimum attribution is requested from a function with
    /// an empty minima catalog.
    #[error("function has no cataloged minima")]
    NoKnownMinima,

    /// Returned when an internal invariant is violated.
    #[error("internal error: {0}")]
    Internal(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;
