//! Chalkboard Core Library
//!
//! Element model, hit-testing, undo history, viewport transforms and the
//! pointer-driven interaction engine for the Chalkboard whiteboard.

pub mod canvas;
pub mod config;
pub mod elements;
pub mod error;
pub mod geometry;
pub mod history;
pub mod input;
pub mod interaction;
pub mod selection;
pub mod solve;
pub mod tools;
pub mod viewport;

pub use canvas::{Canvas, TextOverlay};
pub use config::{CanvasConfig, ConfigError};
pub use elements::{
    ApproximateMeasure, Element, ElementId, ElementKind, Elements, TextMeasure, UpdateOptions,
};
pub use error::{CanvasError, CanvasResult};
pub use history::History;
pub use input::{MouseButton, PointerEvent};
pub use interaction::{Action, Grab, SelectedElement};
pub use selection::{cursor_for_position, resized_coordinates, resolve_hit, CursorStyle, Hit, Position};
pub use solve::{SolveError, SolveRequest, SolveResponse, Solver};
pub use tools::Tool;
pub use viewport::Viewport;
