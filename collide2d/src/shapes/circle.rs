use crate::core::{math::Vector2, traits::Real};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
/// Circle defined by a center point and radius.
///
/// Radius is expected to be non-negative but is not validated.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle<T = f64> {
    /// Center point of the circle.
    pub center: Vector2<T>,
    /// Radius of the circle.
    pub radius: T,
}

impl<T> Circle<T>
where
    T: Real,
{
    /// Create a new circle with `center` point and `radius` given.
    #[inline]
    pub fn new(center: Vector2<T>, radius: T) -> Self {
        Circle { center, radius }
    }
}
