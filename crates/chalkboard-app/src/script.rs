//! Gesture script format.
//!
//! A script is a JSON array of steps. Pointer steps use the core event
//! format (`{"event": "down", "position": {"x": 1.0, "y": 2.0}}`); every
//! other step is a command tagged by `"command"`.

use chalkboard_core::PointerEvent;
use serde::{Deserialize, Serialize};

/// Non-pointer operations a script can perform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Switch tool by name.
    Tool { tool: String },
    /// Finish text entry with `content`.
    Blur { content: String },
    Undo,
    Redo,
    Zoom { delta: f64 },
    ZoomIn,
    ZoomOut,
    Reset,
    /// Record an answer from the solving service.
    Solution { result: String },
}

/// One script entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Pointer(PointerEvent),
    Command(Command),
}

impl Step {
    /// Parse a whole script.
    pub fn parse_script(json: &str) -> Result<Vec<Step>, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chalkboard_core::MouseButton;

    #[test]
    fn test_parse_mixed_script() {
        let steps = Step::parse_script(
            r#"[
                { "command": "tool", "tool": "rectangle" },
                { "event": "down", "position": { "x": 10.0, "y": 10.0 }, "button": "middle" },
                { "event": "wheel", "delta": { "x": 0.0, "y": 4.0 } },
                { "command": "zoom_in" },
                { "command": "blur", "content": "hi" }
            ]"#,
        )
        .unwrap();

        assert_eq!(steps.len(), 5);
        assert_eq!(steps[0], Step::Command(Command::Tool { tool: "rectangle".into() }));
        assert!(matches!(
            steps[1],
            Step::Pointer(PointerEvent::Down { button: MouseButton::Middle, .. })
        ));
        assert!(matches!(steps[2], Step::Pointer(PointerEvent::Wheel { .. })));
        assert_eq!(steps[3], Step::Command(Command::ZoomIn));
        assert_eq!(steps[4], Step::Command(Command::Blur { content: "hi".into() }));
    }

    #[test]
    fn test_reject_unknown_step() {
        assert!(Step::parse_script(r#"[{ "command": "explode" }]"#).is_err());
    }
}
