//! Tool system for the whiteboard.

use crate::shapes::{Circle, Rectangle, Shape, ShapeKind};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Available drawing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Rectangle,
    Circle,
}

impl ToolKind {
    /// All tools, in toolbar order.
    pub const ALL: [ToolKind; 2] = [ToolKind::Rectangle, ToolKind::Circle];

    /// Label shown on the toolbar.
    pub fn label(self) -> &'static str {
        match self {
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Circle => "Circle",
        }
    }

    /// The shape variant this tool produces.
    pub fn shape_kind(self) -> ShapeKind {
        match self {
            ToolKind::Rectangle => ShapeKind::Rectangle,
            ToolKind::Circle => ShapeKind::Circle,
        }
    }

    /// Create a zero-extent shape anchored at `start` with a fresh id.
    pub fn begin_shape(self, start: Point) -> Shape {
        match self {
            ToolKind::Rectangle => Shape::Rectangle(Rectangle::new(start)),
            ToolKind::Circle => Shape::Circle(Circle::new(start)),
        }
    }
}
