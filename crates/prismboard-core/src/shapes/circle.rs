//! Circle shape.

use super::{ShapeId, ShapeTrait};
use kurbo::{Circle as KurboCircle, Point, Rect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A circle defined by its center and a non-negative radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub(crate) id: ShapeId,
    /// Center x.
    pub cx: f64,
    /// Center y.
    pub cy: f64,
    /// Radius.
    pub r: f64,
}

impl Circle {
    /// Create a zero-radius circle at `center`.
    pub fn new(center: Point) -> Self {
        Self::with_radius(center, 0.0)
    }

    /// Create a circle with an explicit radius.
    pub fn with_radius(center: Point, r: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            cx: center.x,
            cy: center.y,
            r,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    /// Get as a kurbo Circle.
    pub fn as_kurbo(&self) -> KurboCircle {
        KurboCircle::new(self.center(), self.r)
    }
}

impl ShapeTrait for Circle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        self.as_kurbo().bounding_box()
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.center().distance(point) <= self.r + tolerance
    }

    fn resize_to(&mut self, point: Point) {
        self.r = self.center().distance(point);
    }

    fn translate(&mut self, delta: Vec2) {
        self.cx += delta.x;
        self.cy += delta.y;
    }
}
