//! Pairwise boolean overlap tests between shapes, and the separating axis and
//! closest point building blocks they share.
//!
//! Every function here is pure and allocation free: no shared state is read or
//! written and results depend only on the shape values given, so the tests are
//! safe to invoke concurrently from any number of threads. Boundary
//! comparisons are inclusive (shapes that exactly touch overlap) and follow
//! plain IEEE-754 semantics, NaN coordinates propagate to a `false` result.
mod circle_circle_overlap;
mod circle_rect_overlap;
mod closest_point;
mod rect_rect_overlap;
mod sat;

pub use circle_circle_overlap::circle_circle_overlap;
pub use circle_rect_overlap::{
    circle_aabb_overlap, circle_rect_overlap_closest_point, circle_rect_overlap_sat,
};
pub use closest_point::rect_closest_point;
pub use rect_rect_overlap::{aabb_aabb_overlap, rect_rect_overlap};
pub use sat::{intervals_overlap, project_circle_onto_axis, project_onto_axis};
