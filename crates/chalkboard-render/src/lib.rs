//! Chalkboard Render Library
//!
//! Renderer abstraction for Chalkboard plus a display-list implementation
//! that turns each frame into device-space paths and text runs.

mod display_list;
mod renderer;
pub mod stroke;

pub use display_list::{DisplayListRenderer, DrawCommand};
pub use renderer::{RenderContext, Renderer};
