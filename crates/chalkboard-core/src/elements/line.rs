//! Straight line element.

use super::{ElementId, ElementTrait};
use crate::geometry::{near_point, on_segment};
use crate::selection::{Endpoint, HANDLE_TOLERANCE, LINE_SLACK, Position};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A line segment between two endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub(crate) id: ElementId,
    /// First endpoint (x1, y1).
    pub start: Point,
    /// Second endpoint (x2, y2).
    pub end: Point,
}

impl Line {
    /// Create a new line.
    pub fn new(id: ElementId, start: Point, end: Point) -> Self {
        Self { id, start, end }
    }
}

impl ElementTrait for Line {
    fn id(&self) -> ElementId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    fn position_within(&self, point: Point) -> Option<Position> {
        near_point(point, self.start, Position::Endpoint(Endpoint::Start), HANDLE_TOLERANCE)
            .or_else(|| near_point(point, self.end, Position::Endpoint(Endpoint::End), HANDLE_TOLERANCE))
            .or_else(|| on_segment(point, self.start, self.end, LINE_SLACK).then_some(Position::Inside))
    }
}
