//! Rectangle shape.

use super::{ShapeId, ShapeTrait};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An axis-aligned rectangle anchored at one fixed corner.
///
/// `width` and `height` keep their sign while the opposite corner is dragged
/// up or left; use [`Rectangle::normalized`] for a positive-extent rect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// Fixed corner, x.
    pub x: f64,
    /// Fixed corner, y.
    pub y: f64,
    /// Signed extent along x.
    pub width: f64,
    /// Signed extent along y.
    pub height: f64,
}

impl Rectangle {
    /// Create a zero-extent rectangle anchored at `corner`.
    pub fn new(corner: Point) -> Self {
        Self::with_size(corner, 0.0, 0.0)
    }

    /// Create a rectangle with an explicit extent.
    pub fn with_size(corner: Point, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            x: corner.x,
            y: corner.y,
            width,
            height,
        }
    }

    /// The fixed corner.
    pub fn corner(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Get the rectangle as a kurbo Rect with positive width and height.
    pub fn normalized(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height).abs()
    }
}

impl ShapeTrait for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        self.normalized()
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.normalized().inflate(tolerance, tolerance).contains(point)
    }

    fn resize_to(&mut self, point: Point) {
        self.width = point.x - self.x;
        self.height = point.y - self.y;
    }

    fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }
}
