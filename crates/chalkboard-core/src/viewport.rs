//! Viewport module for pan/zoom transforms.

use crate::config::CanvasConfig;
use kurbo::{Affine, Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Viewport manages the view transform for the canvas.
///
/// Zoom pivots on the center of the canvas: `scale_offset` shifts the scaled
/// drawing back so the canvas midpoint stays put.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Accumulated pan, in logical units.
    pub pan_offset: Vec2,
    /// Current zoom factor (1.0 = 100%).
    pub scale: f64,
    /// Minimum allowed zoom factor.
    pub min_scale: f64,
    /// Maximum allowed zoom factor.
    pub max_scale: f64,
    /// Canvas size in device pixels.
    pub canvas_size: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_config(&CanvasConfig::default())
    }
}

impl Viewport {
    /// Create a viewport with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &CanvasConfig) -> Self {
        Self {
            pan_offset: Vec2::ZERO,
            scale: 1.0,
            min_scale: config.min_scale,
            max_scale: config.max_scale,
            canvas_size: Size::new(config.canvas_width, config.canvas_height),
        }
    }

    /// Correction that keeps zoom centered on the canvas midpoint.
    pub fn scale_offset(&self) -> Vec2 {
        Vec2::new(
            (self.canvas_size.width * self.scale - self.canvas_size.width) / 2.0,
            (self.canvas_size.height * self.scale - self.canvas_size.height) / 2.0,
        )
    }

    /// Transform from logical to device coordinates, for rendering.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.pan_offset * self.scale - self.scale_offset()) * Affine::scale(self.scale)
    }

    /// Convert a device point (what the pointer reports) to logical coordinates.
    pub fn to_logical(&self, device: Point) -> Point {
        let offset = self.scale_offset();
        Point::new(
            (device.x - self.pan_offset.x * self.scale + offset.x) / self.scale,
            (device.y - self.pan_offset.y * self.scale + offset.y) / self.scale,
        )
    }

    /// Convert a logical point to device coordinates.
    pub fn to_device(&self, logical: Point) -> Point {
        self.transform() * logical
    }

    /// Pan by a delta in logical units.
    pub fn pan(&mut self, delta: Vec2) {
        self.pan_offset += delta;
    }

    /// Change the zoom factor by `delta`, clamped to the allowed range.
    ///
    /// Inverted bounds never panic; `min_scale` wins.
    pub fn zoom(&mut self, delta: f64) {
        self.scale = (self.scale + delta).min(self.max_scale).max(self.min_scale);
    }

    /// Zoom factor as a whole percentage, for display.
    pub fn zoom_percent(&self) -> i64 {
        (self.scale * 100.0).round() as i64
    }

    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_size = Size::new(width, height);
    }
}
