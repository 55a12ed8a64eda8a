//! Hit-testing, handles, and handle-driven resizing.

use crate::elements::{Element, ElementId, Elements};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Per-axis distance within which a handle is grabbed.
pub const HANDLE_TOLERANCE: f64 = 5.0;
/// Slack of the on-segment test for lines.
pub const LINE_SLACK: f64 = 1.0;
/// Slack of the on-segment test for pencil strokes.
pub const FREEHAND_SLACK: f64 = 3.0;

/// Line endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    Start,
    End,
}

/// Corner positions of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Cardinal points of a circle's bounding ellipse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// Where on an element a point landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Endpoint handle of a line.
    Endpoint(Endpoint),
    /// Corner handle of a rectangle.
    Corner(Corner),
    /// Cardinal handle of a circle.
    Edge(Edge),
    /// The body of the element (drag to move).
    Inside,
}

impl Position {
    /// Whether this position is a resize handle rather than the body.
    pub fn is_handle(self) -> bool {
        self != Position::Inside
    }
}

/// An element under the cursor together with the part that was hit.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub element: Element,
    pub position: Position,
}

impl Hit {
    pub fn id(&self) -> ElementId {
        self.element.id()
    }
}

/// Find the element under `point`.
///
/// Elements are tested in collection order and the first match wins, so when
/// two elements overlap the one drawn earlier is picked.
pub fn resolve_hit(point: Point, elements: &Elements) -> Option<Hit> {
    elements.iter().find_map(|element| {
        element.position_within(point).map(|position| Hit {
            element: element.clone(),
            position,
        })
    })
}

/// Pointer cursor shown over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorStyle {
    #[default]
    Default,
    Move,
    /// Diagonal resize (top-left to bottom-right).
    NwseResize,
    /// Anti-diagonal resize (bottom-left to top-right).
    NeswResize,
}

impl CursorStyle {
    /// CSS cursor name.
    pub fn css_name(self) -> &'static str {
        match self {
            CursorStyle::Default => "default",
            CursorStyle::Move => "move",
            CursorStyle::NwseResize => "nwse-resize",
            CursorStyle::NeswResize => "nesw-resize",
        }
    }
}

/// Cursor for hovering over `position`.
pub fn cursor_for_position(position: Position) -> CursorStyle {
    match position {
        Position::Corner(Corner::TopLeft | Corner::BottomRight) | Position::Endpoint(_) => {
            CursorStyle::NwseResize
        }
        Position::Corner(Corner::BottomLeft | Corner::TopRight) => CursorStyle::NeswResize,
        Position::Edge(_) | Position::Inside => CursorStyle::Move,
    }
}

/// New `(start, end)` corners after dragging `position` to `cursor`.
///
/// Each handle replaces only the coordinates it controls and leaves the
/// opposite side fixed. Returns `None` for the body, which moves instead.
pub fn resized_coordinates(cursor: Point, position: Position, start: Point, end: Point) -> Option<(Point, Point)> {
    let (mut start, mut end) = (start, end);
    match position {
        Position::Corner(Corner::TopLeft) | Position::Endpoint(Endpoint::Start) => start = cursor,
        Position::Corner(Corner::TopRight) => {
            start.y = cursor.y;
            end.x = cursor.x;
        }
        Position::Corner(Corner::BottomLeft) => {
            start.x = cursor.x;
            end.y = cursor.y;
        }
        Position::Corner(Corner::BottomRight) | Position::Endpoint(Endpoint::End) => end = cursor,
        Position::Edge(Edge::Top) => start.y = cursor.y,
        Position::Edge(Edge::Bottom) => end.y = cursor.y,
        Position::Edge(Edge::Left) => start.x = cursor.x,
        Position::Edge(Edge::Right) => end.x = cursor.x,
        Position::Inside => return None,
    }
    Some((start, end))
}
