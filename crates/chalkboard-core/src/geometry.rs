//! Small geometry helpers shared by the element model and hit-testing.

use kurbo::{Point, Rect};

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Returns `tag` when `point` is within `tolerance` of `target` on both axes.
pub fn near_point<T>(point: Point, target: Point, tag: T, tolerance: f64) -> Option<T> {
    if (point.x - target.x).abs() < tolerance && (point.y - target.y).abs() < tolerance {
        Some(tag)
    } else {
        None
    }
}

/// Whether `point` lies on the segment `a`–`b`.
///
/// Uses the triangle inequality: the detour through `point` may be at most
/// `slack` longer than the segment itself.
pub fn on_segment(point: Point, a: Point, b: Point, slack: f64) -> bool {
    let offset = distance(a, b) - (distance(a, point) + distance(b, point));
    offset.abs() < slack
}

/// Order two corners so the first is the min corner and the second the max corner.
pub fn min_max_corners(p1: Point, p2: Point) -> (Point, Point) {
    (
        Point::new(p1.x.min(p2.x), p1.y.min(p2.y)),
        Point::new(p1.x.max(p2.x), p1.y.max(p2.y)),
    )
}

/// Order two endpoints lexicographically by x, then y.
pub fn ordered_endpoints(p1: Point, p2: Point) -> (Point, Point) {
    if p1.x < p2.x || (p1.x == p2.x && p1.y <= p2.y) {
        (p1, p2)
    } else {
        (p2, p1)
    }
}

/// Axis-aligned bounds of a point set, or `None` if it is empty.
pub fn bounds_of(points: &[Point]) -> Option<Rect> {
    let first = points.first()?;
    let mut rect = Rect::from_points(*first, *first);
    for point in &points[1..] {
        rect = rect.union_pt(*point);
    }
    Some(rect)
}
