use super::sat::{intervals_overlap, project_onto_axis};
use crate::core::traits::Real;
use crate::shapes::{AabbRect, OrientedRect};

/// Returns true if the two axis aligned rectangles overlap.
///
/// Inclusive interval overlap on both axes, rectangles sharing only an edge or
/// corner overlap.
///
/// # Examples
///
/// ```
/// # use collide2d::core::math::Vector2;
/// # use collide2d::overlap::aabb_aabb_overlap;
/// # use collide2d::shapes::AabbRect;
/// let r1 = AabbRect::new(Vector2::new(0.0, 0.0), 2.0, 2.0);
/// assert!(aabb_aabb_overlap(r1, AabbRect::new(Vector2::new(1.0, 1.0), 2.0, 2.0)));
/// assert!(!aabb_aabb_overlap(r1, AabbRect::new(Vector2::new(5.0, 0.0), 2.0, 2.0)));
/// ```
#[inline]
pub fn aabb_aabb_overlap<T>(r1: AabbRect<T>, r2: AabbRect<T>) -> bool
where
    T: Real,
{
    r1.min_x() <= r2.max_x()
        && r1.max_x() >= r2.min_x()
        && r1.min_y() <= r2.max_y()
        && r1.max_y() >= r2.min_y()
}

/// Returns true if the two oriented rectangles overlap, using the separating
/// axis theorem.
///
/// Candidate axes are the two independent edge directions of each rectangle
/// (the orthogonality of rectangle edges makes these cover all edge normals).
/// Any axis with disjoint corner projection intervals proves the rectangles
/// disjoint and short circuits to false, overlap on all four axes proves
/// overlap.
pub fn rect_rect_overlap<T>(r1: OrientedRect<T>, r2: OrientedRect<T>) -> bool
where
    T: Real,
{
    let [a1, a2] = r1.edge_axes();
    let [b1, b2] = r2.edge_axes();

    [a1, a2, b1, b2].into_iter().all(|axis| {
        intervals_overlap(
            project_onto_axis(&r1.corners, axis),
            project_onto_axis(&r2.corners, axis),
        )
    })
}
