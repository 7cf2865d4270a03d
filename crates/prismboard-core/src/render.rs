//! Render instructions handed to rendering collaborators.

use crate::shapes::{Shape, ShapeId};
use kurbo::{Circle, Rect};

/// Geometry of one shape, normalized for drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Rectangle with positive width and height.
    Rect(Rect),
    Circle(Circle),
}

impl Primitive {
    /// Normalize a shape's geometry for drawing.
    pub fn from_shape(shape: &Shape) -> Self {
        match shape {
            Shape::Rectangle(r) => Primitive::Rect(r.normalized()),
            Shape::Circle(c) => Primitive::Circle(c.as_kurbo()),
        }
    }
}

/// One shape to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderInstruction {
    pub id: ShapeId,
    pub primitive: Primitive,
    /// Drawn with the selection fill.
    pub selected: bool,
    /// Still being drawn, not yet part of the shape list.
    pub provisional: bool,
}

/// An ordered list of instructions, back to front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderFrame {
    pub instructions: Vec<RenderInstruction>,
}

impl RenderFrame {
    /// Build a frame from committed shapes (in z-order) plus the provisional shape.
    pub fn build<'a>(
        shapes: impl IntoIterator<Item = &'a Shape>,
        provisional: Option<&Shape>,
        selected: Option<ShapeId>,
    ) -> Self {
        let mut instructions: Vec<RenderInstruction> = shapes
            .into_iter()
            .map(|shape| RenderInstruction {
                id: shape.id(),
                primitive: Primitive::from_shape(shape),
                selected: selected == Some(shape.id()),
                provisional: false,
            })
            .collect();

        if let Some(shape) = provisional {
            instructions.push(RenderInstruction {
                id: shape.id(),
                primitive: Primitive::from_shape(shape),
                selected: false,
                provisional: true,
            });
        }

        Self { instructions }
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenderInstruction> {
        self.instructions.iter()
    }
}

/// A rendering collaborator that draws frames.
pub trait RenderSink {
    /// Draw `frame`, replacing whatever was drawn before.
    fn present(&mut self, frame: &RenderFrame);
}

/// Sink that discards every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn present(&mut self, _frame: &RenderFrame) {}
}

/// Sink that keeps every presented frame.
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    pub frames: Vec<RenderFrame>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently presented frame.
    pub fn last(&self) -> Option<&RenderFrame> {
        self.frames.last()
    }
}

impl RenderSink for FrameRecorder {
    fn present(&mut self, frame: &RenderFrame) {
        self.frames.push(frame.clone());
    }
}
