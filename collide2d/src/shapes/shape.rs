use super::{AabbRect, Circle, OrientedRect};
use crate::core::traits::Real;
use crate::overlap::{
    aabb_aabb_overlap, circle_aabb_overlap, circle_circle_overlap,
    circle_rect_overlap_closest_point, rect_rect_overlap,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
/// Closed union of the shape kinds supported by the overlap tests.
///
/// The supported shape and algorithm set is fixed and small so it is modeled
/// as a tagged union dispatched per pair in [shapes_overlap] rather than as an
/// open trait.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape<T = f64> {
    /// Circle shape.
    Circle(Circle<T>),
    /// Axis aligned rectangle shape.
    AabbRect(AabbRect<T>),
    /// Oriented rectangle shape.
    OrientedRect(OrientedRect<T>),
}

/// Returns true if the two shapes overlap, dispatching to the pairwise test
/// for the two shape kinds given.
///
/// Circle vs oriented rectangle uses the closest point test
/// ([circle_rect_overlap_closest_point]). A mixed axis aligned and oriented
/// rectangle pair promotes the axis aligned rectangle with
/// [OrientedRect::from_aabb] and runs the separating axis test. Symmetric in
/// its two arguments for every pair of kinds.
///
/// # Examples
///
/// ```
/// # use collide2d::core::math::Vector2;
/// # use collide2d::shapes::{AabbRect, Circle, Shape, shapes_overlap};
/// let circle = Shape::Circle(Circle::new(Vector2::new(2.0, 2.0), 1.0));
/// let rect = Shape::AabbRect(AabbRect::new(Vector2::new(0.0, 0.0), 4.0, 4.0));
/// assert!(shapes_overlap(circle, rect));
/// ```
pub fn shapes_overlap<T>(s1: Shape<T>, s2: Shape<T>) -> bool
where
    T: Real,
{
    match (s1, s2) {
        (Shape::Circle(c1), Shape::Circle(c2)) => circle_circle_overlap(c1, c2),
        (Shape::Circle(c), Shape::AabbRect(r)) | (Shape::AabbRect(r), Shape::Circle(c)) => {
            circle_aabb_overlap(c, r)
        }
        (Shape::Circle(c), Shape::OrientedRect(r)) | (Shape::OrientedRect(r), Shape::Circle(c)) => {
            circle_rect_overlap_closest_point(c, r)
        }
        (Shape::AabbRect(r1), Shape::AabbRect(r2)) => aabb_aabb_overlap(r1, r2),
        (Shape::AabbRect(a), Shape::OrientedRect(o))
        | (Shape::OrientedRect(o), Shape::AabbRect(a)) => {
            rect_rect_overlap(OrientedRect::from_aabb(a), o)
        }
        (Shape::OrientedRect(r1), Shape::OrientedRect(r2)) => rect_rect_overlap(r1, r2),
    }
}
