//! Tool selection.

use crate::elements::ElementKind;
use crate::error::CanvasError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Pick, move and resize existing elements.
    Selection,
    #[default]
    Line,
    Rectangle,
    Circle,
    Pencil,
    Text,
}

impl Tool {
    pub fn name(self) -> &'static str {
        match self {
            Tool::Selection => "selection",
            Tool::Line => "line",
            Tool::Rectangle => "rectangle",
            Tool::Circle => "circle",
            Tool::Pencil => "pencil",
            Tool::Text => "text",
        }
    }

    /// Get all tools in toolbar order.
    pub fn all() -> &'static [Tool] {
        &[
            Tool::Selection,
            Tool::Line,
            Tool::Rectangle,
            Tool::Text,
            Tool::Circle,
            Tool::Pencil,
        ]
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "selection" => Ok(Tool::Selection),
            other => other.parse::<ElementKind>().map(Tool::from),
        }
    }
}

impl From<ElementKind> for Tool {
    fn from(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Line => Tool::Line,
            ElementKind::Rectangle => Tool::Rectangle,
            ElementKind::Circle => Tool::Circle,
            ElementKind::Pencil => Tool::Pencil,
            ElementKind::Text => Tool::Text,
        }
    }
}

impl TryFrom<Tool> for ElementKind {
    type Error = CanvasError;

    fn try_from(tool: Tool) -> Result<Self, Self::Error> {
        match tool {
            Tool::Selection => Err(CanvasError::UnrecognizedType(tool.name().to_string())),
            Tool::Line => Ok(ElementKind::Line),
            Tool::Rectangle => Ok(ElementKind::Rectangle),
            Tool::Circle => Ok(ElementKind::Circle),
            Tool::Pencil => Ok(ElementKind::Pencil),
            Tool::Text => Ok(ElementKind::Text),
        }
    }
}
