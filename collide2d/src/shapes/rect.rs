use crate::core::{math::Vector2, traits::Real};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
/// Axis aligned rectangle defined by its minimum corner and extents.
///
/// Spans `[min_x, min_x + width] x [min_y, min_y + height]`. Extents are
/// expected to be non-negative but are not validated.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AabbRect<T = f64> {
    /// Minimum x, y corner of the rectangle.
    pub origin: Vector2<T>,
    /// Extent of the rectangle along the x axis.
    pub width: T,
    /// Extent of the rectangle along the y axis.
    pub height: T,
}

impl<T> AabbRect<T>
where
    T: Real,
{
    /// Create a new axis aligned rectangle from its minimum corner and extents.
    #[inline]
    pub fn new(origin: Vector2<T>, width: T, height: T) -> Self {
        AabbRect {
            origin,
            width,
            height,
        }
    }

    /// Minimum x value spanned by the rectangle.
    #[inline]
    pub fn min_x(&self) -> T {
        self.origin.x
    }

    /// Minimum y value spanned by the rectangle.
    #[inline]
    pub fn min_y(&self) -> T {
        self.origin.y
    }

    /// Maximum x value spanned by the rectangle.
    #[inline]
    pub fn max_x(&self) -> T {
        self.origin.x + self.width
    }

    /// Maximum y value spanned by the rectangle.
    #[inline]
    pub fn max_y(&self) -> T {
        self.origin.y + self.height
    }

    /// Center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Vector2<T> {
        Vector2::new(
            self.origin.x + self.width / T::two(),
            self.origin.y + self.height / T::two(),
        )
    }
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
/// Rectangle defined by explicit corner points in fixed winding order,
/// allowing arbitrary rotation.
///
/// Corners are ordered such that `corners[0]` to `corners[1]` and `corners[0]`
/// to `corners[3]` are adjacent (orthogonal) edges and `corners[0]` to
/// `corners[2]` is a diagonal.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrientedRect<T = f64> {
    /// Corner points of the rectangle in winding order.
    pub corners: [Vector2<T>; 4],
}

impl<T> OrientedRect<T>
where
    T: Real,
{
    /// Create a new oriented rectangle from its four corner points in winding order.
    #[inline]
    pub fn new(p1: Vector2<T>, p2: Vector2<T>, p3: Vector2<T>, p4: Vector2<T>) -> Self {
        OrientedRect {
            corners: [p1, p2, p3, p4],
        }
    }

    /// Create an oriented rectangle covering the same area as the axis aligned `rect` given.
    #[inline]
    pub fn from_aabb(rect: AabbRect<T>) -> Self {
        OrientedRect::new(
            Vector2::new(rect.min_x(), rect.min_y()),
            Vector2::new(rect.max_x(), rect.min_y()),
            Vector2::new(rect.max_x(), rect.max_y()),
            Vector2::new(rect.min_x(), rect.max_y()),
        )
    }

    /// Create an oriented rectangle from a `center` point, half extents, and rotation
    /// `angle` in radians (counter clockwise).
    pub fn from_center_rotation(
        center: Vector2<T>,
        half_width: T,
        half_height: T,
        angle: T,
    ) -> Self {
        let corner = |x: T, y: T| Vector2::new(x, y).rotate_about(center, angle);
        OrientedRect::new(
            corner(center.x - half_width, center.y - half_height),
            corner(center.x + half_width, center.y - half_height),
            corner(center.x + half_width, center.y + half_height),
            corner(center.x - half_width, center.y + half_height),
        )
    }

    /// The two independent edge direction vectors of the rectangle.
    ///
    /// Because rectangle edges are orthogonal these two directions also cover
    /// the edge normals, so they are the only axes a separating axis test
    /// needs from this rectangle.
    #[inline]
    pub fn edge_axes(&self) -> [Vector2<T>; 2] {
        let [p1, p2, _, p4] = self.corners;
        [p1 - p2, p1 - p4]
    }

    /// The four edges of the rectangle as consecutive corner point pairs.
    #[inline]
    pub fn edges(&self) -> [(Vector2<T>, Vector2<T>); 4] {
        let [p1, p2, p3, p4] = self.corners;
        [(p1, p2), (p2, p3), (p3, p4), (p4, p1)]
    }
}
