use collide2d::{core::math::Vector2, overlap::circle_circle_overlap, shapes::Circle};

fn main() {
    let c1 = Circle::new(Vector2::new(2.0, 3.0), 1.0);
    let c2 = Circle::new(Vector2::new(1.0, 1.0), 2.0);

    // squared center distance is 1 + 4 = 5, squared radii sum is 9
    let colliding = circle_circle_overlap(c1, c2);
    println!("c1 vs c2 collision test result: {colliding}");
    assert!(colliding, "circles at distance sqrt(5) with radii sum 3 overlap");

    // moving the second circle away breaks the overlap
    let c3 = Circle::new(Vector2::new(3.0, 0.0), 1.0);
    let c4 = Circle::new(Vector2::new(0.0, 0.0), 1.0);
    assert!(!circle_circle_overlap(c4, c3), "distance 3 exceeds radii sum 2");
    println!("c3 vs c4 collision test result: {}", circle_circle_overlap(c4, c3));

    // tangent circles still count as overlapping
    let c5 = Circle::new(Vector2::new(2.0, 0.0), 1.0);
    assert!(circle_circle_overlap(c4, c5), "tangent circles overlap");
    println!("tangent circles overlap: {}", circle_circle_overlap(c4, c5));
}
