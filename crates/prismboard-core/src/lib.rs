//! Prismboard Core Library
//!
//! Platform-agnostic shape model and interaction logic for the Prismboard whiteboard.

pub mod canvas;
pub mod input;
pub mod render;
pub mod shapes;
pub mod surface;
pub mod tools;
pub mod whiteboard;

pub use canvas::CanvasDocument;
pub use input::PointerEvent;
pub use render::{FrameRecorder, NullSink, Primitive, RenderFrame, RenderInstruction, RenderSink};
pub use shapes::{Circle, Rectangle, Shape, ShapeId, ShapeKind, ShapeTrait};
pub use surface::{CoordinateSpace, SurfaceFrame};
pub use tools::ToolKind;
pub use whiteboard::{InteractionState, Transition, Whiteboard};
