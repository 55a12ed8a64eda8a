//! Rectangle element.

use super::{ElementId, ElementTrait};
use crate::geometry::near_point;
use crate::selection::{Corner, HANDLE_TOLERANCE, Position};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle spanned by two corners.
///
/// While a gesture is in progress `start` may lie anywhere relative to
/// `end`; once the gesture finalizes `start` is the min corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ElementId,
    /// Corner (x1, y1).
    pub start: Point,
    /// Corner (x2, y2).
    pub end: Point,
}

impl Rectangle {
    /// Create a new rectangle from two corners.
    pub fn new(id: ElementId, start: Point, end: Point) -> Self {
        Self { id, start, end }
    }

    pub fn width(&self) -> f64 {
        (self.end.x - self.start.x).abs()
    }

    pub fn height(&self) -> f64 {
        (self.end.y - self.start.y).abs()
    }
}

impl ElementTrait for Rectangle {
    fn id(&self) -> ElementId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    fn position_within(&self, point: Point) -> Option<Position> {
        let Point { x: x1, y: y1 } = self.start;
        let Point { x: x2, y: y2 } = self.end;
        let corner = |target: Point, corner: Corner| {
            near_point(point, target, Position::Corner(corner), HANDLE_TOLERANCE)
        };

        corner(Point::new(x1, y1), Corner::TopLeft)
            .or_else(|| corner(Point::new(x2, y1), Corner::TopRight))
            .or_else(|| corner(Point::new(x1, y2), Corner::BottomLeft))
            .or_else(|| corner(Point::new(x2, y2), Corner::BottomRight))
            .or_else(|| {
                let inside = point.x >= x1 && point.x <= x2 && point.y >= y1 && point.y <= y2;
                inside.then_some(Position::Inside)
            })
    }
}
