//! 2D collision testing library for circles and rectangles (axis aligned or
//! freely oriented).
//!
//! Every overlap test is a pure boolean function of immutable shape values, a
//! hosting simulation or game loop constructs shapes from its own per frame
//! entity state and invokes the relevant test. The library is agnostic to
//! units, axis handedness, and frame rate.
//!
//! # Quick Code Example
//!
//! ```
//! use collide2d::{
//!     core::math::Vector2,
//!     overlap::circle_circle_overlap,
//!     shapes::{Circle, Shape, shapes_overlap},
//! };
//!
//! let c1 = Circle::new(Vector2::new(2.0, 3.0), 1.0);
//! let c2 = Circle::new(Vector2::new(1.0, 1.0), 2.0);
//! // squared center distance is 5, squared radii sum is 9
//! assert!(circle_circle_overlap(c1, c2));
//!
//! // same test through the closed shape union
//! assert!(shapes_overlap(Shape::Circle(c1), Shape::Circle(c2)));
//! ```
#[macro_use]
mod macros;

pub mod core;
pub mod overlap;
pub mod shapes;
