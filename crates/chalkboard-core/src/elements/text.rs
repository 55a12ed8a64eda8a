//! Text element and text measurement.

use super::{ElementId, ElementTrait};
use crate::config::CanvasConfig;
use crate::selection::Position;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A block of text anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub(crate) id: ElementId,
    /// Top-left corner (x1, y1).
    pub start: Point,
    /// Bottom-right corner (x2, y2), derived from the measured content.
    pub end: Point,
    /// The text content (empty until editing completes).
    pub content: String,
}

impl Text {
    /// Create an empty text box.
    pub fn new(id: ElementId, start: Point, end: Point) -> Self {
        Self {
            id,
            start,
            end,
            content: String::new(),
        }
    }

    /// Create a text box with the given content.
    pub fn with_content(id: ElementId, start: Point, end: Point, content: String) -> Self {
        Self {
            id,
            start,
            end,
            content,
        }
    }
}

impl ElementTrait for Text {
    fn id(&self) -> ElementId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    fn position_within(&self, point: Point) -> Option<Position> {
        let inside = point.x >= self.start.x
            && point.x <= self.end.x
            && point.y >= self.start.y
            && point.y <= self.end.y;
        inside.then_some(Position::Inside)
    }
}

/// Measures rendered text so text boxes can be sized.
///
/// Returning `None` from [`measure_width`](TextMeasure::measure_width) means
/// no measurement backend is available.
pub trait TextMeasure {
    /// Width of `text` in logical pixels.
    fn measure_width(&self, text: &str) -> Option<f64>;

    /// Fixed height of a text box.
    fn line_height(&self) -> f64;
}

/// Width estimate from character count, used when no font backend is wired in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximateMeasure {
    pub font_size: f64,
    pub glyph_advance: f64,
    pub line_height: f64,
}

impl Default for ApproximateMeasure {
    fn default() -> Self {
        Self::from_config(&CanvasConfig::default())
    }
}

impl ApproximateMeasure {
    pub fn from_config(config: &CanvasConfig) -> Self {
        Self {
            font_size: config.font_size,
            glyph_advance: config.glyph_advance,
            line_height: config.line_height,
        }
    }
}

impl TextMeasure for ApproximateMeasure {
    fn measure_width(&self, text: &str) -> Option<f64> {
        let longest = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
        Some(longest as f64 * self.font_size * self.glyph_advance)
    }

    fn line_height(&self) -> f64 {
        self.line_height
    }
}
