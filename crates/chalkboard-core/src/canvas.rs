//! Canvas session: tool, viewport, history and the pointer state machine.

use crate::config::CanvasConfig;
use crate::elements::{
    ApproximateMeasure, Element, ElementId, ElementKind, Elements, TextMeasure, UpdateOptions,
};
use crate::error::CanvasResult;
use crate::history::History;
use crate::input::{MouseButton, PointerEvent};
use crate::interaction::{Action, Grab, SelectedElement};
use crate::selection::{cursor_for_position, resized_coordinates, resolve_hit, CursorStyle};
use crate::solve::{SolveError, SolveRequest, Solver};
use crate::tools::Tool;
use crate::viewport::Viewport;
use kurbo::{Point, Vec2};
use std::fmt;

/// Vertical nudge applied to the text editor so its baseline sits on the box.
const TEXT_OVERLAY_NUDGE: f64 = 7.0;

/// Placement of the live text editor, in device coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOverlay {
    /// Element being edited.
    pub id: ElementId,
    /// Top-left corner of the editor.
    pub position: Point,
    /// Font size scaled by the current zoom.
    pub font_size: f64,
    /// Content the editor should start with.
    pub content: String,
}

/// A whiteboard session.
///
/// Owns the edit history and viewport and turns pointer events into element
/// edits. Every mutation of the element collection goes through
/// [`History::commit`]: presses open a new undo step and drags overwrite it.
pub struct Canvas {
    config: CanvasConfig,
    history: History,
    viewport: Viewport,
    tool: Tool,
    action: Action,
    selected: Option<SelectedElement>,
    cursor: CursorStyle,
    /// Device position of the previous panning event.
    pan_anchor: Point,
    measure: Box<dyn TextMeasure>,
    solution: Option<String>,
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("history", &self.history)
            .field("viewport", &self.viewport)
            .field("tool", &self.tool)
            .field("action", &self.action)
            .field("selected", &self.selected)
            .field("cursor", &self.cursor)
            .field("solution", &self.solution)
            .finish_non_exhaustive()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create a session with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CanvasConfig::default())
    }

    pub fn with_config(config: CanvasConfig) -> Self {
        Self {
            history: History::default(),
            viewport: Viewport::from_config(&config),
            tool: Tool::default(),
            action: Action::None,
            selected: None,
            cursor: CursorStyle::Default,
            pan_anchor: Point::ZERO,
            measure: Box::new(ApproximateMeasure::from_config(&config)),
            solution: None,
            config,
        }
    }

    /// Replace the text measurement backend.
    pub fn with_measure(mut self, measure: impl TextMeasure + 'static) -> Self {
        self.measure = Box::new(measure);
        self
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    // --- Read accessors ---

    /// The current element collection.
    pub fn elements(&self) -> &Elements {
        self.history.current()
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn selected(&self) -> Option<&SelectedElement> {
        self.selected.as_ref()
    }

    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Id of the text element being edited, if any.
    pub fn editing_element(&self) -> Option<ElementId> {
        match (&self.action, &self.selected) {
            (Action::Writing, Some(selected)) => Some(selected.id()),
            _ => None,
        }
    }

    // --- Tools ---

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if tool != Tool::Selection {
            self.cursor = CursorStyle::Default;
        }
        log::debug!("tool: {} -> {}", self.tool, tool);
        self.tool = tool;
    }

    /// Select a tool by name, leaving the current tool in place on failure.
    pub fn set_tool_named(&mut self, name: &str) -> CanvasResult<()> {
        let tool = name.parse::<Tool>().inspect_err(|err| log::warn!("set_tool: {err}"))?;
        self.set_tool(tool);
        Ok(())
    }

    // --- Pointer events ---

    /// Dispatch a pointer event to the matching handler.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> CanvasResult<()> {
        match *event {
            PointerEvent::Down { position, button } => self.on_pointer_down(position, button),
            PointerEvent::Move { position } => self.on_pointer_move(position),
            PointerEvent::Up { position } => self.on_pointer_up(position),
            PointerEvent::Leave { position } => self.on_pointer_leave(position),
            PointerEvent::Wheel { delta } => {
                self.on_wheel(delta);
                Ok(())
            }
        }
    }

    /// Start a gesture at a device position.
    pub fn on_pointer_down(&mut self, device: Point, button: MouseButton) -> CanvasResult<()> {
        if self.action == Action::Writing {
            log::trace!("pointer down ignored while writing");
            return Ok(());
        }
        let point = self.viewport.to_logical(device);

        if button == MouseButton::Middle {
            self.pan_anchor = device;
            self.set_action(Action::Panning);
            return Ok(());
        }

        match self.tool {
            Tool::Selection => {
                let Some(hit) = resolve_hit(point, self.elements()) else {
                    return Ok(());
                };
                // Picking records an undo step; the drag then overwrites it.
                let snapshot = self.elements().clone();
                self.history.commit(snapshot, false);
                let action = if hit.position.is_handle() {
                    Action::Resizing
                } else {
                    Action::Moving
                };
                log::debug!("picked element {} at {:?}", hit.id(), hit.position);
                self.selected = Some(SelectedElement::picked(hit.element, hit.position, point));
                self.set_action(action);
            }
            tool => {
                let kind = ElementKind::try_from(tool)?;
                let element = Element::create(self.elements().next_id(), point, point, kind);
                let elements = self.elements().with_appended(element.clone());
                self.history.commit(elements, false);
                log::debug!("created {} element {}", kind, element.id());
                self.selected = Some(SelectedElement::created(element, point));
                self.set_action(if kind == ElementKind::Text {
                    Action::Writing
                } else {
                    Action::Drawing
                });
            }
        }
        Ok(())
    }

    /// Continue the current gesture.
    pub fn on_pointer_move(&mut self, device: Point) -> CanvasResult<()> {
        let point = self.viewport.to_logical(device);

        if self.tool == Tool::Selection {
            self.cursor = resolve_hit(point, self.elements())
                .map_or(CursorStyle::Default, |hit| cursor_for_position(hit.position));
        }

        match self.action {
            Action::Panning => {
                // Pan offset is in logical units, so device deltas shrink with zoom.
                let delta = (device - self.pan_anchor) / self.viewport.scale;
                self.pan_anchor = device;
                self.viewport.pan(delta);
                log::trace!("pan offset {:?}", self.viewport.pan_offset);
            }
            Action::Drawing => self.extend_drawing(point)?,
            Action::Moving => self.move_selected(point)?,
            Action::Resizing => self.resize_selected(point)?,
            Action::None | Action::Writing => {}
        }
        Ok(())
    }

    /// Finish the current gesture.
    pub fn on_pointer_up(&mut self, device: Point) -> CanvasResult<()> {
        if self.action == Action::Writing {
            return Ok(());
        }
        let point = self.viewport.to_logical(device);

        if let Some(selected) = &self.selected {
            let id = selected.id();
            if self.action == Action::Moving
                && selected.element.kind() == ElementKind::Text
                && point == selected.press_point
            {
                log::debug!("editing text element {id}");
                self.set_action(Action::Writing);
                return Ok(());
            }

            if matches!(self.action, Action::Drawing | Action::Resizing) {
                let normalized = self
                    .elements()
                    .get(id)
                    .filter(|element| element.kind().needs_normalize())
                    .map(Element::normalized);
                if let Some(element) = normalized {
                    let elements = self.elements().with_replaced(element)?;
                    self.history.commit(elements, true);
                }
            }
        }

        self.selected = None;
        self.set_action(Action::None);
        Ok(())
    }

    /// The pointer left the canvas: end the gesture as if released.
    pub fn on_pointer_leave(&mut self, device: Point) -> CanvasResult<()> {
        self.on_pointer_up(device)
    }

    /// Scroll the view. Content follows the wheel.
    pub fn on_wheel(&mut self, delta: Vec2) {
        self.viewport.pan(-delta);
        log::trace!("wheel pan offset {:?}", self.viewport.pan_offset);
    }

    /// The text editor lost focus: store its content as a new undo step.
    ///
    /// If the text cannot be measured nothing is committed and the session
    /// stays in [`Action::Writing`].
    pub fn on_text_blur(&mut self, content: &str) -> CanvasResult<()> {
        let Some(selected) = self.selected.as_ref().filter(|_| self.action == Action::Writing) else {
            log::warn!("text blur without an active text element");
            return Ok(());
        };
        let id = selected.id();
        let start = selected.element.start();
        let elements = self
            .elements()
            .update(id, start, start, ElementKind::Text, UpdateOptions::text(content, &*self.measure))
            .inspect_err(|err| log::warn!("text commit failed: {err}"))?;
        self.history.commit(elements, false);
        log::debug!("committed text element {id}");

        self.selected = None;
        self.set_action(Action::None);
        Ok(())
    }

    /// Placement of the live text editor while writing.
    pub fn text_overlay(&self) -> Option<TextOverlay> {
        let id = self.editing_element()?;
        let start = self.elements().get(id)?.start();
        let scale = self.viewport.scale;
        let pan = self.viewport.pan_offset;
        let offset = self.viewport.scale_offset();
        Some(TextOverlay {
            id,
            position: Point::new(
                start.x * scale + pan.x * scale - offset.x,
                (start.y - TEXT_OVERLAY_NUDGE) * scale + pan.y * scale - offset.y,
            ),
            font_size: self.config.font_size * scale,
            content: self
                .elements()
                .get(id)
                .and_then(Element::content)
                .unwrap_or_default()
                .to_string(),
        })
    }

    // --- History ---

    /// Step back one snapshot. Any gesture in progress is dropped so it
    /// cannot keep writing into the restored snapshot.
    pub fn undo(&mut self) -> bool {
        self.end_gesture();
        let moved = self.history.undo();
        log::debug!("undo: {moved}");
        moved
    }

    pub fn redo(&mut self) -> bool {
        self.end_gesture();
        let moved = self.history.redo();
        log::debug!("redo: {moved}");
        moved
    }

    /// Clear the board as a new undo step and forget the last solution.
    pub fn reset(&mut self) {
        self.end_gesture();
        self.history.commit(Elements::new(), false);
        self.solution = None;
        log::debug!("board reset");
    }

    // --- Viewport ---

    pub fn zoom(&mut self, delta: f64) {
        self.viewport.zoom(delta);
        log::debug!("zoom {}%", self.viewport.zoom_percent());
    }

    pub fn zoom_in(&mut self) {
        self.zoom(self.config.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.zoom(-self.config.zoom_step);
    }

    // --- Solve results ---

    pub fn solution(&self) -> Option<&str> {
        self.solution.as_deref()
    }

    pub fn set_solution(&mut self, solution: impl Into<String>) {
        self.solution = Some(solution.into());
    }

    /// Ask `solver` about the board and keep its answer.
    ///
    /// Failures are returned to the caller; elements and the previous
    /// solution are left untouched.
    pub fn solve_with(&mut self, solver: &dyn Solver, request: &SolveRequest) -> Result<&str, SolveError> {
        request.validate()?;
        let response = solver
            .solve(request)
            .inspect_err(|err| log::warn!("solve failed: {err}"))?;
        log::debug!("solution: {}", response.result);
        Ok(self.solution.insert(response.result).as_str())
    }

    // --- Gesture steps ---

    fn set_action(&mut self, action: Action) {
        if self.action != action {
            log::debug!("action: {:?} -> {:?}", self.action, action);
            self.action = action;
        }
    }

    fn end_gesture(&mut self) {
        self.selected = None;
        self.set_action(Action::None);
    }

    fn extend_drawing(&mut self, point: Point) -> CanvasResult<()> {
        let Some(last) = self.elements().last() else {
            return Ok(());
        };
        let elements = self.elements().update(
            last.id(),
            last.start(),
            point,
            last.kind(),
            UpdateOptions::default(),
        )?;
        self.history.commit(elements, true);
        Ok(())
    }

    fn move_selected(&mut self, point: Point) -> CanvasResult<()> {
        let Some(selected) = &self.selected else {
            return Ok(());
        };
        let element = &selected.element;
        let elements = match (&selected.grab, element) {
            (Grab::PointOffsets(offsets), Element::Freehand(stroke)) => {
                self.elements().with_replaced(Element::Freehand(stroke.placed_at(point, offsets)))?
            }
            (Grab::Offset(offset), _) => {
                let start = point - *offset;
                let end = start + (element.end() - element.start());
                let options = UpdateOptions::text(element.content().unwrap_or_default(), &*self.measure);
                self.elements().update(element.id(), start, end, element.kind(), options)?
            }
            _ => return Ok(()),
        };
        self.history.commit(elements, true);
        Ok(())
    }

    fn resize_selected(&mut self, point: Point) -> CanvasResult<()> {
        let Some(selected) = &self.selected else {
            return Ok(());
        };
        let element = &selected.element;
        let Some((start, end)) = selected
            .position
            .and_then(|position| resized_coordinates(point, position, element.start(), element.end()))
        else {
            return Ok(());
        };
        let elements = self.elements().update(
            element.id(),
            start,
            end,
            element.kind(),
            UpdateOptions::default(),
        )?;
        self.history.commit(elements, true);
        Ok(())
    }
}
