use super::Vector2;
use crate::core::traits::Real;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use collide2d::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 { (v1, v2) } else { (v2, v1) }
}

/// Saturates `value` to be between `min` and `max`.
///
/// Comparisons follow IEEE-754 partial order, a NaN `value` is returned unchanged.
///
/// # Examples
///
/// ```
/// # use collide2d::core::math::*;
/// assert_eq!(clamp(5.0, 1.0, 4.0), 4.0);
/// assert_eq!(clamp(-2.0, 1.0, 4.0), 1.0);
/// assert_eq!(clamp(2.5, 1.0, 4.0), 2.5);
/// ```
#[inline]
pub fn clamp<T>(value: T, min: T, max: T) -> T
where
    T: PartialOrd,
{
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Distance squared between the points `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Returns the closest point on the line segment from `p0` to `p1` to the `point` given.
///
/// Computed as `p0 + t * (p1 - p0)` with the parametric value clamped to `t = 0` to `t = 1`,
/// snapping to the segment end points using fuzzy comparing.
#[inline]
pub fn line_seg_closest_point<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    // Dot product used to find angles
    // See: http://geomalgorithms.com/a02-_lines.html
    let v = p1 - p0;
    let w = point - p0;
    let c1 = w.dot(v);
    if c1 < T::fuzzy_epsilon() {
        return p0;
    }

    let c2 = v.length_squared();
    if c2 < c1 + T::fuzzy_epsilon() {
        return p1;
    }

    let b = c1 / c2;
    p0 + v.scale(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn closest_point_interior() {
        let p0 = vec2(0.0, 0.0);
        let p1 = vec2(4.0, 0.0);
        let result = line_seg_closest_point(p0, p1, vec2(1.0, 3.0));
        assert!(result.fuzzy_eq(vec2(1.0, 0.0)));
    }

    #[test]
    fn closest_point_clamps_to_ends() {
        let p0 = vec2(0.0, 0.0);
        let p1 = vec2(4.0, 0.0);
        assert!(line_seg_closest_point(p0, p1, vec2(-2.0, 1.0)).fuzzy_eq(p0));
        assert!(line_seg_closest_point(p0, p1, vec2(7.0, -1.0)).fuzzy_eq(p1));
    }

    #[test]
    fn closest_point_degenerate_segment() {
        let p = vec2(2.0, 2.0);
        assert!(line_seg_closest_point(p, p, vec2(5.0, 5.0)).fuzzy_eq(p));
    }
}
