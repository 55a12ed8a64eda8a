//! Freehand pencil stroke.

use super::{ElementId, ElementTrait};
use crate::geometry::{bounds_of, near_point, on_segment};
use crate::selection::{FREEHAND_SLACK, HANDLE_TOLERANCE, Position};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A freehand drawing (ordered series of points).
///
/// A stroke always holds at least its seed point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Freehand {
    pub(crate) id: ElementId,
    /// Points in the stroke, in drawing order.
    pub points: Vec<Point>,
}

impl Freehand {
    /// Start a new stroke at `seed`.
    pub fn new(id: ElementId, seed: Point) -> Self {
        Self {
            id,
            points: vec![seed],
        }
    }

    /// Create from existing points, falling back to a single origin point when empty.
    pub fn from_points(id: ElementId, points: Vec<Point>) -> Self {
        if points.is_empty() {
            return Self::new(id, Point::ZERO);
        }
        Self { id, points }
    }

    /// Append a point to the stroke.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// First point of the stroke.
    pub fn first(&self) -> Point {
        self.points.first().copied().unwrap_or(Point::ZERO)
    }

    /// Last point of the stroke.
    pub fn last(&self) -> Point {
        self.points.last().copied().unwrap_or(Point::ZERO)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Offsets from `anchor` to every point, used to drag the stroke rigidly.
    pub fn offsets_from(&self, anchor: Point) -> Vec<Vec2> {
        self.points.iter().map(|p| anchor - *p).collect()
    }

    /// Rebuild the stroke so that each point sits at `cursor - offset`.
    pub fn placed_at(&self, cursor: Point, offsets: &[Vec2]) -> Self {
        let points = offsets.iter().map(|offset| cursor - *offset).collect();
        Self::from_points(self.id, points)
    }
}

impl ElementTrait for Freehand {
    fn id(&self) -> ElementId {
        self.id
    }

    fn bounds(&self) -> Rect {
        bounds_of(&self.points).unwrap_or(Rect::ZERO)
    }

    fn position_within(&self, point: Point) -> Option<Position> {
        if let [only] = self.points.as_slice() {
            return near_point(point, *only, Position::Inside, HANDLE_TOLERANCE);
        }
        self.points
            .windows(2)
            .any(|w| on_segment(point, w[0], w[1], FREEHAND_SLACK))
            .then_some(Position::Inside)
    }
}
