//! Renderer trait abstraction.

use chalkboard_core::{Canvas, ElementId};
use kurbo::Affine;
use peniko::Color;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The canvas to render.
    pub canvas: &'a Canvas,
    /// Background color.
    pub background_color: Color,
    /// Stroke and text color.
    pub ink_color: Color,
    /// Stroke width in logical pixels.
    pub stroke_width: f64,
    /// Element currently being edited (skip rendering in build_scene).
    pub editing_element_id: Option<ElementId>,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    ///
    /// The text element being written, if any, is skipped so the live editor
    /// can sit on top of it.
    pub fn new(canvas: &'a Canvas) -> Self {
        Self {
            canvas,
            background_color: Color::from_rgba8(255, 255, 255, 255),
            ink_color: Color::from_rgba8(0, 0, 0, 255),
            stroke_width: 1.0,
            editing_element_id: canvas.editing_element(),
        }
    }

    /// Logical to device transform for this frame.
    pub fn transform(&self) -> Affine {
        self.canvas.viewport().transform()
    }
}

/// Trait for rendering backends.
///
/// Every call redraws the whole frame from the canvas state.
pub trait Renderer: Send + Sync {
    /// Build the scene/command buffer for a frame.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}
