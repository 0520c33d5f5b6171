pub mod intersect_2d;
pub mod polygon_2d;
pub mod winding;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Geometric tolerance for floating-point comparisons in tests.
///
/// The kernel predicates themselves compare exact signs; the walk and wedge
/// selection rules depend on them.
pub const TOLERANCE: f64 = 1e-10;

/// Perp-dot product `a.x * b.y - a.y * b.x`.
///
/// With Y up, negative when `b` points clockwise of `a`, positive when
/// counter-clockwise, zero when parallel.
#[must_use]
pub fn perp_dot(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}
