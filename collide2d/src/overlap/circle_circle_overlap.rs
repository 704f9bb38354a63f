use crate::core::{math::dist_squared, traits::Real};
use crate::shapes::Circle;

/// Returns true if the two circles overlap.
///
/// Compares squared center distance against the squared radii sum so no square
/// root is taken. The boundary is inclusive, circles that are exactly tangent
/// overlap. Symmetric in its two arguments.
///
/// # Examples
///
/// ```
/// # use collide2d::core::math::Vector2;
/// # use collide2d::overlap::circle_circle_overlap;
/// # use collide2d::shapes::Circle;
/// let c1 = Circle::new(Vector2::new(0.0, 0.0), 1.0);
/// assert!(circle_circle_overlap(c1, Circle::new(Vector2::new(1.5, 0.0), 1.0)));
/// assert!(!circle_circle_overlap(c1, Circle::new(Vector2::new(3.0, 0.0), 1.0)));
/// ```
#[inline]
pub fn circle_circle_overlap<T>(c1: Circle<T>, c2: Circle<T>) -> bool
where
    T: Real,
{
    let radius_sum = c1.radius + c2.radius;
    dist_squared(c1.center, c2.center) <= radius_sum * radius_sum
}
