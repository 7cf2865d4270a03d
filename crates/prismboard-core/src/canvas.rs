//! Canvas document: the ordered list of committed shapes.

use crate::shapes::{Shape, ShapeId};
use kurbo::{Point, Rect, Vec2};

/// Committed shapes in z-order (back to front).
///
/// Ids are unique across the list; [`CanvasDocument::add_shape`] refuses a
/// shape whose id is already present.
#[derive(Debug, Clone, Default)]
pub struct CanvasDocument {
    shapes: Vec<Shape>,
}

impl CanvasDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape on top of the others.
    /// Returns false if a shape with the same id already exists.
    pub fn add_shape(&mut self, shape: Shape) -> bool {
        if self.contains(shape.id()) {
            log::warn!("Refusing duplicate shape id {}", shape.id());
            return false;
        }
        self.shapes.push(shape);
        true
    }

    /// Check whether a shape with this id is committed.
    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.iter().any(|s| s.id() == id)
    }

    /// Get a shape by ID.
    pub fn get_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Get a mutable reference to a shape by ID.
    pub fn get_shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    /// Translate one shape; returns false if it does not exist.
    pub fn translate_shape(&mut self, id: ShapeId, delta: Vec2) -> bool {
        match self.get_shape_mut(id) {
            Some(shape) => {
                shape.translate(delta);
                true
            }
            None => false,
        }
    }

    /// Get shapes in z-order (back to front).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Find shapes at a point, front to back.
    pub fn shapes_at_point(&self, point: Point, tolerance: f64) -> Vec<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .filter(|s| s.hit_test(point, tolerance))
            .map(Shape::id)
            .collect()
    }

    /// Topmost shape under a point.
    pub fn topmost_at(&self, point: Point, tolerance: f64) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .find(|s| s.hit_test(point, tolerance))
            .map(Shape::id)
    }

    /// Get the bounding box of all shapes.
    pub fn bounds(&self) -> Option<Rect> {
        self.shapes
            .iter()
            .map(Shape::bounds)
            .reduce(|acc, b| acc.union(b))
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }
}
