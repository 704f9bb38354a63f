use collide2d::{
    core::math::Vector2,
    shapes::{AabbRect, Circle, OrientedRect, Shape, shapes_overlap},
};
use std::f64::consts::FRAC_PI_4;

fn main() {
    let rect = AabbRect::new(Vector2::new(0.0, 0.0), 4.0, 4.0);

    // circle centered inside the rectangle overlaps for any radius
    let inside = Shape::Circle(Circle::new(rect.center(), 1.0));
    assert!(shapes_overlap(inside, Shape::AabbRect(rect)));
    println!("circle at rectangle center overlaps: true");

    // circle past the corner stays clear, closest rectangle point is (4, 4)
    let past_corner = Shape::Circle(Circle::new(Vector2::new(5.0, 5.0), 1.0));
    assert!(!shapes_overlap(past_corner, Shape::AabbRect(rect)));
    println!("circle past the corner overlaps: false");

    // a rotated rectangle reaching into the axis aligned one
    let rotated = Shape::OrientedRect(OrientedRect::from_center_rotation(
        Vector2::new(5.0, 2.0),
        2.0,
        1.0,
        FRAC_PI_4,
    ));
    let result = shapes_overlap(Shape::AabbRect(rect), rotated);
    println!("rotated rectangle vs axis aligned rectangle: {result}");
    assert!(result);

    // every pair of kinds dispatches symmetrically
    let shapes = [
        inside,
        past_corner,
        Shape::AabbRect(rect),
        rotated,
    ];
    for s1 in shapes {
        for s2 in shapes {
            assert_eq!(shapes_overlap(s1, s2), shapes_overlap(s2, s1));
        }
    }
    println!("all pairs dispatch symmetrically");
}
