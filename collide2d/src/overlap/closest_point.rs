use crate::core::{
    math::{Vector2, dist_squared, line_seg_closest_point},
    traits::Real,
};
use crate::shapes::OrientedRect;

/// Returns the closest point on the boundary of `rect` to the `point` given.
///
/// Each of the four edges is reduced to its closest segment point via clamped
/// line projection and the globally nearest candidate wins. Note a `point`
/// inside the rectangle still maps to the boundary, not to itself.
///
/// # Examples
///
/// ```
/// # use collide2d::core::math::Vector2;
/// # use collide2d::overlap::rect_closest_point;
/// # use collide2d::shapes::{AabbRect, OrientedRect};
/// let rect = OrientedRect::from_aabb(AabbRect::new(Vector2::new(0.0, 0.0), 4.0, 4.0));
/// let closest = rect_closest_point(rect, Vector2::new(5.0, 5.0));
/// assert!(closest.fuzzy_eq(Vector2::new(4.0, 4.0)));
/// ```
pub fn rect_closest_point<T>(rect: OrientedRect<T>, point: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    let edges = rect.edges();
    let (first_a, first_b) = edges[0];
    let mut closest = line_seg_closest_point(first_a, first_b, point);
    let mut closest_dist = dist_squared(closest, point);

    for &(a, b) in edges[1..].iter() {
        let candidate = line_seg_closest_point(a, b, point);
        let candidate_dist = dist_squared(candidate, point);
        if candidate_dist < closest_dist {
            closest = candidate;
            closest_dist = candidate_dist;
        }
    }

    closest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;
    use crate::shapes::AabbRect;

    fn unit_square() -> OrientedRect<f64> {
        OrientedRect::from_aabb(AabbRect::new(vec2(0.0, 0.0), 1.0, 1.0))
    }

    #[test]
    fn closest_point_on_edge_interior() {
        let closest = rect_closest_point(unit_square(), vec2(0.5, 3.0));
        assert!(closest.fuzzy_eq(vec2(0.5, 1.0)));
    }

    #[test]
    fn closest_point_snaps_to_corner() {
        let closest = rect_closest_point(unit_square(), vec2(4.0, -2.0));
        assert!(closest.fuzzy_eq(vec2(1.0, 0.0)));
    }

    #[test]
    fn interior_point_maps_to_boundary() {
        let closest = rect_closest_point(unit_square(), vec2(0.5, 0.1));
        assert!(closest.fuzzy_eq(vec2(0.5, 0.0)));
    }
}
