//! Shape definitions for the whiteboard.

mod circle;
mod rectangle;

pub use circle::Circle;
pub use rectangle::Rectangle;

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Discriminant of a [`Shape`] without its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the normalized bounding box in surface coordinates.
    fn bounds(&self) -> Rect;

    /// Check if a point (in surface coordinates) hits the filled area of this shape.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;

    /// Extend the shape from its fixed anchor towards `point`.
    fn resize_to(&mut self, point: Point);

    /// Shift the position fields by `delta`, leaving extent untouched.
    fn translate(&mut self, delta: Vec2);
}

/// Tagged union of every drawable shape.
///
/// Serializes with an internal `type` tag, e.g.
/// `{"type":"circle","id":"…","cx":50.0,"cy":50.0,"r":30.0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Rectangle(s) => s.id(),
            Shape::Circle(s) => s.id(),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rectangle(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
        }
    }

    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        match self {
            Shape::Rectangle(s) => s.hit_test(point, tolerance),
            Shape::Circle(s) => s.hit_test(point, tolerance),
        }
    }

    pub fn resize_to(&mut self, point: Point) {
        match self {
            Shape::Rectangle(s) => s.resize_to(point),
            Shape::Circle(s) => s.resize_to(point),
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Rectangle(s) => s.translate(delta),
            Shape::Circle(s) => s.translate(delta),
        }
    }

    /// Get the rectangle if this shape is a rectangle.
    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match self {
            Shape::Rectangle(r) => Some(r),
            _ => None,
        }
    }

    /// Get the circle if this shape is a circle.
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(c) => Some(c),
            _ => None,
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}
