//! Display-list renderer: records device-space draw commands for a frame.

use crate::renderer::{RenderContext, Renderer};
use crate::stroke::stroke_path;
use chalkboard_core::Element;
use kurbo::{Affine, BezPath, Ellipse, Point, Rect, Shape as KurboShape};
use peniko::Color;

/// Flattening tolerance for curves converted to paths.
const PATH_TOLERANCE: f64 = 0.1;

/// One recorded drawing operation, already in device coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole frame.
    Clear(Color),
    /// Stroke an outline.
    Stroke { path: BezPath, color: Color, width: f64 },
    /// Draw one line of text with its top-left corner at `origin`.
    Text {
        origin: Point,
        content: String,
        font_size: f64,
        color: Color,
    },
}

impl DrawCommand {
    pub fn name(&self) -> &'static str {
        match self {
            DrawCommand::Clear(_) => "clear",
            DrawCommand::Stroke { .. } => "stroke",
            DrawCommand::Text { .. } => "text",
        }
    }
}

/// Renderer that keeps the last frame as a list of [`DrawCommand`]s.
#[derive(Debug, Default)]
pub struct DisplayListRenderer {
    commands: Vec<DrawCommand>,
}

impl DisplayListRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the last built frame.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    fn render_element(&mut self, element: &Element, ctx: &RenderContext, transform: Affine) {
        let outline = match element {
            Element::Line(line) => {
                let mut path = BezPath::new();
                path.move_to(line.start);
                path.line_to(line.end);
                path
            }
            Element::Rectangle(rect) => Rect::from_points(rect.start, rect.end).to_path(PATH_TOLERANCE),
            Element::Circle(circle) => {
                Ellipse::from_rect(Rect::from_points(circle.start, circle.end)).to_path(PATH_TOLERANCE)
            }
            Element::Freehand(stroke) => stroke_path(&stroke.points),
            Element::Text(text) => {
                self.render_text(&text.content, text.start, ctx, transform);
                return;
            }
        };
        self.commands.push(DrawCommand::Stroke {
            path: transform * outline,
            color: ctx.ink_color,
            width: ctx.stroke_width * ctx.canvas.viewport().scale,
        });
    }

    fn render_text(&mut self, content: &str, start: Point, ctx: &RenderContext, transform: Affine) {
        let config = ctx.canvas.config();
        let scale = ctx.canvas.viewport().scale;
        for (row, line) in content.lines().enumerate() {
            let top_left = start + kurbo::Vec2::new(0.0, row as f64 * config.line_height);
            self.commands.push(DrawCommand::Text {
                origin: transform * top_left,
                content: line.to_string(),
                font_size: config.font_size * scale,
                color: ctx.ink_color,
            });
        }
    }
}

impl Renderer for DisplayListRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(self.background_color(ctx)));

        let transform = ctx.transform();
        for element in ctx.canvas.elements() {
            // Skip the element being edited; the text overlay draws it.
            if ctx.editing_element_id == Some(element.id()) {
                continue;
            }
            self.render_element(element, ctx, transform);
        }
        log::trace!("built frame with {} commands", self.commands.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chalkboard_core::{Canvas, MouseButton, Tool};

    fn draw(canvas: &mut Canvas, tool: Tool, from: Point, to: Point) {
        canvas.set_tool(tool);
        canvas.on_pointer_down(from, MouseButton::Left).unwrap();
        canvas.on_pointer_move(to).unwrap();
        canvas.on_pointer_up(to).unwrap();
    }

    #[test]
    fn test_build_empty_scene() {
        let canvas = Canvas::new();
        let mut renderer = DisplayListRenderer::new();
        renderer.build_scene(&RenderContext::new(&canvas));
        assert_eq!(renderer.commands().len(), 1);
        assert_eq!(renderer.commands()[0].name(), "clear");
    }

    #[test]
    fn test_build_scene_with_shapes() {
        let mut canvas = Canvas::new();
        draw(&mut canvas, Tool::Rectangle, Point::new(10.0, 10.0), Point::new(100.0, 80.0));
        draw(&mut canvas, Tool::Circle, Point::new(200.0, 200.0), Point::new(240.0, 260.0));
        draw(&mut canvas, Tool::Line, Point::new(0.0, 0.0), Point::new(50.0, 50.0));

        let mut renderer = DisplayListRenderer::new();
        renderer.build_scene(&RenderContext::new(&canvas));
        let strokes = renderer.commands().iter().filter(|c| c.name() == "stroke").count();
        assert_eq!(strokes, 3);
    }

    #[test]
    fn test_paths_follow_viewport() {
        let mut canvas = Canvas::new();
        draw(&mut canvas, Tool::Rectangle, Point::new(10.0, 10.0), Point::new(100.0, 80.0));
        canvas.on_wheel(kurbo::Vec2::new(-20.0, 0.0));

        let mut renderer = DisplayListRenderer::new();
        renderer.build_scene(&RenderContext::new(&canvas));
        let Some(DrawCommand::Stroke { path, .. }) = renderer.commands().get(1) else {
            panic!("expected a stroke");
        };
        let bounds = path.bounding_box();
        assert!((bounds.x0 - 30.0).abs() < 1e-9);
        assert!((bounds.x1 - 120.0).abs() < 1e-9);
        assert!((bounds.y0 - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_skips_text_being_edited() {
        let mut canvas = Canvas::new();
        canvas.set_tool(Tool::Text);
        canvas.on_pointer_down(Point::new(20.0, 20.0), MouseButton::Left).unwrap();
        canvas.on_text_blur("a\nb").unwrap();

        let mut renderer = DisplayListRenderer::new();
        renderer.build_scene(&RenderContext::new(&canvas));
        let texts: Vec<_> = renderer
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { origin, content, .. } => Some((*origin, content.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(
            texts,
            vec![
                (Point::new(20.0, 20.0), "a".to_string()),
                (Point::new(20.0, 40.0), "b".to_string())
            ]
        );

        // Click it again to edit: it disappears from the frame.
        canvas.set_tool(Tool::Selection);
        canvas.on_pointer_down(Point::new(22.0, 25.0), MouseButton::Left).unwrap();
        canvas.on_pointer_up(Point::new(22.0, 25.0)).unwrap();
        renderer.build_scene(&RenderContext::new(&canvas));
        assert!(renderer.commands().iter().all(|c| c.name() != "text"));
    }
}
