//! Script runner.

use crate::script::{Command, Step};
use chalkboard_core::{Action, Canvas, CanvasError, ConfigError, Elements, Tool};
use chalkboard_render::{DisplayListRenderer, RenderContext, Renderer};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors surfaced by the `chalkboard` binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid script: {0}")]
    Script(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("Step {index} failed: {source}")]
    Step {
        index: usize,
        #[source]
        source: CanvasError,
    },
}

/// Final state of a replayed session.
#[derive(Debug, Serialize)]
pub struct Report {
    pub tool: Tool,
    pub action: Action,
    /// CSS name of the hover cursor.
    pub cursor: &'static str,
    pub zoom_percent: i64,
    pub can_undo: bool,
    pub can_redo: bool,
    pub solution: Option<String>,
    pub elements: Elements,
    /// Number of draw commands per kind in the final frame.
    pub frame: BTreeMap<&'static str, usize>,
}

impl Report {
    fn capture(canvas: &Canvas) -> Self {
        let mut renderer = DisplayListRenderer::new();
        renderer.build_scene(&RenderContext::new(canvas));
        let mut frame = BTreeMap::new();
        for command in renderer.commands() {
            *frame.entry(command.name()).or_insert(0) += 1;
        }

        Self {
            tool: canvas.tool(),
            action: canvas.action(),
            cursor: canvas.cursor().css_name(),
            zoom_percent: canvas.viewport().zoom_percent(),
            can_undo: canvas.can_undo(),
            can_redo: canvas.can_redo(),
            solution: canvas.solution().map(str::to_string),
            elements: canvas.elements().clone(),
            frame,
        }
    }
}

/// Replay `steps` on `canvas`, stopping at the first failing step.
pub fn run_script(canvas: &mut Canvas, steps: &[Step]) -> Result<Report, AppError> {
    for (index, step) in steps.iter().enumerate() {
        log::trace!("step {index}: {step:?}");
        apply(canvas, step).map_err(|source| AppError::Step { index, source })?;
    }
    log::info!("replayed {} steps, {} elements", steps.len(), canvas.elements().len());
    Ok(Report::capture(canvas))
}

fn apply(canvas: &mut Canvas, step: &Step) -> Result<(), CanvasError> {
    match step {
        Step::Pointer(event) => canvas.handle_pointer_event(event)?,
        Step::Command(command) => match command {
            Command::Tool { tool } => canvas.set_tool_named(tool)?,
            Command::Blur { content } => canvas.on_text_blur(content)?,
            Command::Undo => {
                canvas.undo();
            }
            Command::Redo => {
                canvas.redo();
            }
            Command::Zoom { delta } => canvas.zoom(*delta),
            Command::ZoomIn => canvas.zoom_in(),
            Command::ZoomOut => canvas.zoom_out(),
            Command::Reset => canvas.reset(),
            Command::Solution { result } => canvas.set_solution(result.as_str()),
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(json: &str) -> Result<Report, AppError> {
        let steps = Step::parse_script(json)?;
        run_script(&mut Canvas::new(), &steps)
    }

    #[test]
    fn test_draw_and_report() {
        let report = run(r#"[
            { "command": "tool", "tool": "rectangle" },
            { "event": "down", "position": { "x": 100.0, "y": 80.0 } },
            { "event": "move", "position": { "x": 10.0, "y": 10.0 } },
            { "event": "up", "position": { "x": 10.0, "y": 10.0 } },
            { "command": "tool", "tool": "pencil" },
            { "event": "down", "position": { "x": 200.0, "y": 200.0 } },
            { "event": "move", "position": { "x": 210.0, "y": 205.0 } },
            { "event": "leave", "position": { "x": 210.0, "y": 205.0 } }
        ]"#)
        .unwrap();

        assert_eq!(report.elements.len(), 2);
        assert_eq!(report.action, Action::None);
        assert_eq!(report.cursor, "default");
        assert_eq!(report.frame.get("stroke"), Some(&2));
        assert_eq!(report.frame.get("clear"), Some(&1));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["elements"][0]["type"], "rectangle");
        assert_eq!(json["elements"][0]["start"]["x"], 10.0);
        assert_eq!(json["elements"][1]["type"], "pencil");
    }

    #[test]
    fn test_undo_reset_and_solution() {
        let report = run(r#"[
            { "event": "down", "position": { "x": 0.0, "y": 0.0 } },
            { "event": "up", "position": { "x": 0.0, "y": 0.0 } },
            { "command": "solution", "result": "x = 1" },
            { "command": "reset" },
            { "command": "undo" },
            { "command": "zoom_in" }
        ]"#)
        .unwrap();

        assert_eq!(report.elements.len(), 1);
        assert!(report.can_redo);
        assert_eq!(report.solution, None);
        assert_eq!(report.zoom_percent, 120);
    }

    #[test]
    fn test_unknown_tool_stops_replay() {
        let err = run(r#"[
            { "event": "down", "position": { "x": 0.0, "y": 0.0 } },
            { "event": "up", "position": { "x": 0.0, "y": 0.0 } },
            { "command": "tool", "tool": "triangle" }
        ]"#)
        .unwrap_err();

        assert!(matches!(
            err,
            AppError::Step { index: 2, source: CanvasError::UnrecognizedType(ref name) } if name == "triangle"
        ));
    }
}
