//! Pencil stroke smoothing.

use kurbo::{BezPath, Point};

/// Smooth path through a pencil stroke.
///
/// Each recorded point becomes the control point of a quadratic curve that
/// ends halfway to the next point, so corners between samples are rounded off.
/// Strokes with fewer than three points are drawn as straight segments.
pub fn stroke_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((&first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to(first);

    if rest.len() < 2 {
        match rest.first() {
            Some(&next) => path.line_to(next),
            // Single tap: a zero-length segment so round caps show a dot.
            None => path.line_to(first),
        }
        return path;
    }

    for pair in rest.windows(2) {
        path.quad_to(pair[0], pair[0].midpoint(pair[1]));
    }
    if let Some(&last) = rest.last() {
        path.line_to(last);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    #[test]
    fn test_empty_stroke() {
        assert!(stroke_path(&[]).elements().is_empty());
    }

    #[test]
    fn test_single_point_is_a_dot() {
        let path = stroke_path(&[Point::new(3.0, 4.0)]);
        assert_eq!(
            path.elements(),
            &[PathEl::MoveTo(Point::new(3.0, 4.0)), PathEl::LineTo(Point::new(3.0, 4.0))]
        );
    }

    #[test]
    fn test_smoothing_uses_midpoints() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(20.0, 10.0),
        ];
        let path = stroke_path(&points);
        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::QuadTo(Point::new(10.0, 0.0), Point::new(10.0, 5.0)),
                PathEl::QuadTo(Point::new(10.0, 10.0), Point::new(15.0, 10.0)),
                PathEl::LineTo(Point::new(20.0, 10.0)),
            ]
        );
    }
}
