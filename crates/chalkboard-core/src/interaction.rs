//! Interaction state: what the current gesture is doing and to which element.

use crate::elements::{Element, ElementId};
use crate::selection::Position;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// The gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Idle, waiting for a pointer press.
    #[default]
    None,
    /// Extending a freshly created element.
    Drawing,
    /// Dragging an element by its body.
    Moving,
    /// Dragging one of an element's handles.
    Resizing,
    /// Dragging the view with the middle button.
    Panning,
    /// Editing a text element through the text overlay.
    Writing,
}

/// How the selected element was grabbed, captured at pointer-down.
#[derive(Debug, Clone, PartialEq)]
pub enum Grab {
    /// Freshly created by a drawing tool; nothing to preserve.
    Created,
    /// Cursor offset from the element's (x1, y1) corner.
    Offset(Vec2),
    /// Cursor offset from every point of a pencil stroke.
    PointOffsets(Vec<Vec2>),
}

/// The element targeted by the current gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedElement {
    /// The element as it was when the gesture started.
    pub element: Element,
    /// The part that was hit (`None` for newly created elements).
    pub position: Option<Position>,
    /// Captured grab offsets.
    pub grab: Grab,
    /// Logical point where the gesture started.
    pub press_point: Point,
}

impl SelectedElement {
    /// Selection for an element a drawing tool just created.
    pub fn created(element: Element, press_point: Point) -> Self {
        Self {
            element,
            position: None,
            grab: Grab::Created,
            press_point,
        }
    }

    /// Selection for an element picked with the selection tool.
    ///
    /// Pencil strokes remember an offset per point so the stroke keeps its
    /// shape while dragged; everything else remembers one corner offset.
    pub fn picked(element: Element, position: Position, press_point: Point) -> Self {
        let grab = match &element {
            Element::Freehand(stroke) => Grab::PointOffsets(stroke.offsets_from(press_point)),
            other => Grab::Offset(press_point - other.start()),
        };
        Self {
            element,
            position: Some(position),
            grab,
            press_point,
        }
    }

    pub fn id(&self) -> ElementId {
        self.element.id()
    }
}
