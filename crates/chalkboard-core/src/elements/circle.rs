//! Circle (ellipse) element.

use super::{ElementId, ElementTrait};
use crate::geometry::near_point;
use crate::selection::{Edge, HANDLE_TOLERANCE, Position};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// An ellipse inscribed in the box spanned by two corners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub(crate) id: ElementId,
    /// Bounding box corner (x1, y1).
    pub start: Point,
    /// Bounding box corner (x2, y2).
    pub end: Point,
}

impl Circle {
    /// Create a new circle from its bounding box corners.
    pub fn new(id: ElementId, start: Point, end: Point) -> Self {
        Self { id, start, end }
    }

    /// Center of the bounding box.
    pub fn center(&self) -> Point {
        self.start.midpoint(self.end)
    }

    /// Horizontal and vertical radii.
    pub fn radii(&self) -> (f64, f64) {
        (
            (self.end.x - self.start.x).abs() / 2.0,
            (self.end.y - self.start.y).abs() / 2.0,
        )
    }
}

impl ElementTrait for Circle {
    fn id(&self) -> ElementId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    fn position_within(&self, point: Point) -> Option<Position> {
        let Point { x: x1, y: y1 } = self.start;
        let Point { x: x2, y: y2 } = self.end;
        let center = self.center();
        let edge = |target: Point, edge: Edge| {
            near_point(point, target, Position::Edge(edge), HANDLE_TOLERANCE)
        };

        edge(Point::new(center.x, y1), Edge::Top)
            .or_else(|| edge(Point::new(center.x, y2), Edge::Bottom))
            .or_else(|| edge(Point::new(x1, center.y), Edge::Left))
            .or_else(|| edge(Point::new(x2, center.y), Edge::Right))
            .or_else(|| {
                let (rx, ry) = self.radii();
                if rx == 0.0 || ry == 0.0 {
                    return None;
                }
                let dx = (point.x - center.x) / rx;
                let dy = (point.y - center.y) / ry;
                (dx * dx + dy * dy <= 1.0).then_some(Position::Inside)
            })
    }
}
