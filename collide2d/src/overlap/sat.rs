use crate::core::{math::Vector2, traits::Real};
use crate::shapes::Circle;

/// Projects the set of `points` onto `axis`, returning the (min, max) interval
/// of the dot products.
///
/// The axis does not need to be normalized, projected values are scaled by the
/// axis length and are not Euclidean distances. Interval comparisons remain
/// valid as long as both shapes in a separating axis iteration are projected
/// onto the same axis.
#[inline]
pub fn project_onto_axis<T>(points: &[Vector2<T>], axis: Vector2<T>) -> (T, T)
where
    T: Real,
{
    debug_assert!(!points.is_empty(), "at least one point required to project");
    let first = axis.dot(points[0]);
    points[1..].iter().fold((first, first), |(min, max), &p| {
        let d = axis.dot(p);
        (
            if d < min { d } else { min },
            if d > max { d } else { max },
        )
    })
}

/// Projects `circle` onto `axis`, returning the (min, max) interval of the
/// projected center extended by the radius on both sides.
///
/// The radius term is not scaled by the axis length, matching how
/// [circle_rect_overlap_sat](crate::overlap::circle_rect_overlap_sat) applies
/// its axes.
#[inline]
pub fn project_circle_onto_axis<T>(circle: Circle<T>, axis: Vector2<T>) -> (T, T)
where
    T: Real,
{
    let center = axis.dot(circle.center);
    (center - circle.radius, center + circle.radius)
}

/// Returns true if the two (min, max) intervals overlap, inclusive at the
/// boundary (intervals sharing only an end point overlap).
#[inline]
pub fn intervals_overlap<T>(interval1: (T, T), interval2: (T, T)) -> bool
where
    T: Real,
{
    interval1.1 >= interval2.0 && interval2.1 >= interval1.0
}
