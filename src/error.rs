use thiserror::Error;

/// Validation failures reported at the discovery boundary.
///
/// Every variant is detected before any graph state is built, so a failed
/// discovery leaves nothing behind. The checks run in a fixed, observable
/// order: emptiness, duplicate positions, negative coordinates, then the
/// edge list in input order.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiscoverError {
    /// No positions or no edges were supplied.
    #[error("graph is empty: {positions} positions, {edges} edges")]
    GraphEmpty { positions: usize, edges: usize },

    /// A vertex position has a negative coordinate.
    #[error("vertex {vertex} at ({x}, {y}) lies outside the first quadrant")]
    InvalidCoordinateSystem { vertex: usize, x: f64, y: f64 },

    /// Two distinct vertices share a position.
    #[error("vertices {first} and {second} share position ({x}, {y})")]
    VerticesHaveSamePosition {
        first: usize,
        second: usize,
        x: f64,
        y: f64,
    },

    /// An edge references a vertex index outside the position array.
    #[error("edge ({a}, {b}) references a vertex outside 0..{len}")]
    EdgeEndpointOutOfBounds { a: usize, b: usize, len: usize },

    /// The same ordered endpoint pair appears twice in the edge list.
    #[error("edge ({a}, {b}) appears more than once")]
    DuplicateEdgeFound { a: usize, b: usize },
}

/// Convenience type alias for results using [`DiscoverError`].
pub type Result<T> = std::result::Result<T, DiscoverError>;
