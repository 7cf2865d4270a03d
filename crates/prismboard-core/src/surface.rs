//! Surface frame for converting between viewport and surface coordinates.

use kurbo::{Affine, Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Default drawing surface size.
pub const DEFAULT_SURFACE_SIZE: Size = Size::new(800.0, 600.0);

/// Which reference frame a pointer position is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CoordinateSpace {
    /// Relative to the top-left corner of the drawing surface.
    #[default]
    Surface,
    /// Relative to the top-left corner of the window/viewport.
    Viewport,
}

/// Placement of the drawing surface inside the viewport.
///
/// Every pointer position is converted into surface coordinates before the
/// whiteboard does arithmetic on it, so drawing and dragging share a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceFrame {
    /// Viewport position of the surface's top-left corner.
    pub origin: Vec2,
    /// Size of the drawing surface.
    pub size: Size,
}

impl Default for SurfaceFrame {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            size: DEFAULT_SURFACE_SIZE,
        }
    }
}

impl SurfaceFrame {
    /// Create a frame with the given origin and size.
    pub fn new(origin: Vec2, size: Size) -> Self {
        Self { origin, size }
    }

    /// Transform from surface coordinates to viewport coordinates.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.origin)
    }

    /// Convert a viewport point to surface coordinates.
    pub fn viewport_to_surface(&self, point: Point) -> Point {
        point - self.origin
    }

    /// Convert a surface point to viewport coordinates.
    pub fn surface_to_viewport(&self, point: Point) -> Point {
        point + self.origin
    }

    /// Normalize a point expressed in `space` to surface coordinates.
    pub fn to_surface(&self, point: Point, space: CoordinateSpace) -> Point {
        match space {
            CoordinateSpace::Surface => point,
            CoordinateSpace::Viewport => self.viewport_to_surface(point),
        }
    }

    /// Whether a surface point lies on the drawing surface.
    pub fn contains(&self, point: Point) -> bool {
        self.size.to_rect().contains(point)
    }
}
