//! Pointer events consumed by the whiteboard.

use crate::shapes::ShapeId;
use crate::surface::CoordinateSpace;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event type for unified mouse/touch handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        space: CoordinateSpace,
        /// Shape the press landed on, when the host resolved one.
        target: Option<ShapeId>,
    },
    Move {
        position: Point,
        space: CoordinateSpace,
    },
    Up {
        position: Point,
        space: CoordinateSpace,
    },
}

impl PointerEvent {
    /// Press on the bare drawing surface.
    pub fn down(position: Point) -> Self {
        PointerEvent::Down {
            position,
            space: CoordinateSpace::Surface,
            target: None,
        }
    }

    /// Press that landed on `target`, with `position` in viewport coordinates.
    pub fn down_on_shape(target: ShapeId, position: Point) -> Self {
        PointerEvent::Down {
            position,
            space: CoordinateSpace::Viewport,
            target: Some(target),
        }
    }

    pub fn moved(position: Point) -> Self {
        PointerEvent::Move {
            position,
            space: CoordinateSpace::Surface,
        }
    }

    pub fn up(position: Point) -> Self {
        PointerEvent::Up {
            position,
            space: CoordinateSpace::Surface,
        }
    }

    /// Re-express the event in another coordinate space without converting the position.
    pub fn in_space(mut self, new_space: CoordinateSpace) -> Self {
        match &mut self {
            PointerEvent::Down { space, .. }
            | PointerEvent::Move { space, .. }
            | PointerEvent::Up { space, .. } => *space = new_space,
        }
        self
    }

    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Move { position, .. }
            | PointerEvent::Up { position, .. } => *position,
        }
    }

    pub fn space(&self) -> CoordinateSpace {
        match self {
            PointerEvent::Down { space, .. }
            | PointerEvent::Move { space, .. }
            | PointerEvent::Up { space, .. } => *space,
        }
    }
}
