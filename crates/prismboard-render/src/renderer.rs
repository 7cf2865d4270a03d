//! Shared renderer types: palette, errors and the per-shape drawing trait.

use peniko::Color;
use prismboard_core::render::{RenderFrame, RenderInstruction};
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Fixed colors used to draw shapes.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Fill of unselected shapes.
    pub fill: Color,
    /// Fill of the selected shape.
    pub selected_fill: Color,
    /// Outline color.
    pub stroke: Color,
    /// Outline width in surface units.
    pub stroke_width: f64,
    /// Surface background.
    pub background: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            fill: Color::from_rgba8(173, 216, 230, 255),          // light blue
            selected_fill: Color::from_rgba8(144, 238, 144, 255), // light green
            stroke: Color::from_rgba8(0, 0, 255, 255),
            stroke_width: 2.0,
            background: Color::from_rgba8(255, 255, 255, 255),
        }
    }
}

impl Palette {
    /// Fill color for an instruction.
    pub fn fill_for(&self, instruction: &RenderInstruction) -> Color {
        if instruction.selected {
            self.selected_fill
        } else {
            self.fill
        }
    }
}

/// Format a color as a CSS hex string (`#rrggbb`, or `#rrggbbaa` when translucent).
pub fn css_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

/// Helper trait for shape rendering (used internally by renderers).
pub trait ShapeRenderer {
    /// Start a new frame, discarding previous output.
    fn reset(&mut self);

    /// Draw one shape.
    fn render_instruction(&mut self, instruction: &RenderInstruction);

    /// Draw a whole frame back to front.
    fn render_frame(&mut self, frame: &RenderFrame) {
        self.reset();
        for instruction in frame.iter() {
            self.render_instruction(instruction);
        }
    }
}
