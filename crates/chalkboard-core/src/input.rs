//! Pointer input events.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

/// Pointer event in device coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum PointerEvent {
    Down {
        position: Point,
        #[serde(default)]
        button: MouseButton,
    },
    Move {
        position: Point,
    },
    Up {
        position: Point,
    },
    /// The pointer left the canvas; ends the gesture like a release.
    Leave {
        position: Point,
    },
    /// Wheel or trackpad scroll.
    Wheel {
        delta: Vec2,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_down_defaults_to_left_button() {
        let event: PointerEvent =
            serde_json::from_str(r#"{ "event": "down", "position": { "x": 1.0, "y": 2.0 } }"#).unwrap();
        assert_eq!(
            event,
            PointerEvent::Down {
                position: Point::new(1.0, 2.0),
                button: MouseButton::Left
            }
        );
    }

    #[test]
    fn test_parse_wheel() {
        let event: PointerEvent =
            serde_json::from_str(r#"{ "event": "wheel", "delta": { "x": 0.0, "y": 5.0 } }"#).unwrap();
        assert_eq!(event, PointerEvent::Wheel { delta: Vec2::new(0.0, 5.0) });
    }
}
