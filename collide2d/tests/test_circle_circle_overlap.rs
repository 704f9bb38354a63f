use collide2d::{core::math::Vector2, overlap::circle_circle_overlap, shapes::Circle};

fn circle(x: f64, y: f64, radius: f64) -> Circle<f64> {
    Circle::new(Vector2::new(x, y), radius)
}

#[test]
fn overlapping() {
    // center distance 1.5, radii sum 2
    assert!(circle_circle_overlap(
        circle(0.0, 0.0, 1.0),
        circle(1.5, 0.0, 1.0)
    ));
}

#[test]
fn separated() {
    // center distance 3, radii sum 2
    assert!(!circle_circle_overlap(
        circle(0.0, 0.0, 1.0),
        circle(3.0, 0.0, 1.0)
    ));
}

#[test]
fn overlapping_different_radii() {
    // squared center distance 5, squared radii sum 9
    assert!(circle_circle_overlap(
        circle(2.0, 3.0, 1.0),
        circle(1.0, 1.0, 2.0)
    ));
}

#[test]
fn tangent_is_inclusive() {
    // center distance exactly equal to radii sum
    assert!(circle_circle_overlap(
        circle(0.0, 0.0, 1.0),
        circle(2.0, 0.0, 1.0)
    ));
    assert!(circle_circle_overlap(
        circle(-1.0, 2.0, 0.25),
        circle(-1.0, 0.5, 1.25)
    ));
}

#[test]
fn contained_circle_overlaps() {
    assert!(circle_circle_overlap(
        circle(0.0, 0.0, 5.0),
        circle(1.0, 1.0, 0.5)
    ));
}

#[test]
fn symmetric() {
    let cases = [
        (circle(0.0, 0.0, 1.0), circle(1.5, 0.0, 1.0)),
        (circle(0.0, 0.0, 1.0), circle(3.0, 0.0, 1.0)),
        (circle(2.0, 3.0, 1.0), circle(1.0, 1.0, 2.0)),
        (circle(0.0, 0.0, 1.0), circle(2.0, 0.0, 1.0)),
    ];
    for (c1, c2) in cases {
        assert_eq!(
            circle_circle_overlap(c1, c2),
            circle_circle_overlap(c2, c1),
            "symmetry failed for {c1:?} vs {c2:?}"
        );
    }
}

#[test]
fn self_overlap() {
    let c = circle(3.0, -2.0, 1.5);
    assert!(circle_circle_overlap(c, c));
}

#[test]
fn zero_radius() {
    // two points at the same position
    assert!(circle_circle_overlap(
        circle(1.0, 1.0, 0.0),
        circle(1.0, 1.0, 0.0)
    ));
    // distinct points never overlap
    assert!(!circle_circle_overlap(
        circle(1.0, 1.0, 0.0),
        circle(1.0, 1.5, 0.0)
    ));
    // point exactly on the other circle's boundary
    assert!(circle_circle_overlap(
        circle(1.0, 0.0, 0.0),
        circle(0.0, 0.0, 1.0)
    ));
}

#[test]
fn nan_never_overlaps() {
    let nan = f64::NAN;
    let ok = circle(0.0, 0.0, 1.0);
    for bad in [
        circle(nan, 0.0, 1.0),
        circle(0.0, nan, 1.0),
        circle(0.0, 0.0, nan),
    ] {
        assert!(!circle_circle_overlap(ok, bad));
        assert!(!circle_circle_overlap(bad, ok));
        assert!(!circle_circle_overlap(bad, bad));
    }
}
