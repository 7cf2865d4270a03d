//! SVG document renderer.

use crate::renderer::{css_color, Palette, ShapeRenderer};
use kurbo::Size;
use prismboard_core::render::{Primitive, RenderFrame, RenderInstruction, RenderSink};

/// Renders frames into a standalone SVG document.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    size: Size,
    palette: Palette,
    body: String,
    document: String,
}

impl SvgRenderer {
    /// Create a renderer for a surface of the given size.
    pub fn new(size: Size) -> Self {
        Self::with_palette(size, Palette::default())
    }

    pub fn with_palette(size: Size, palette: Palette) -> Self {
        let mut renderer = Self {
            size,
            palette,
            body: String::new(),
            document: String::new(),
        };
        renderer.finish();
        renderer
    }

    /// The SVG document for the last presented frame.
    pub fn document(&self) -> &str {
        &self.document
    }

    fn finish(&mut self) {
        let (w, h) = (self.size.width, self.size.height);
        self.document = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
             <rect width=\"100%\" height=\"100%\" fill=\"{bg}\"/>\n{body}</svg>\n",
            bg = css_color(self.palette.background),
            body = self.body,
        );
    }
}

impl ShapeRenderer for SvgRenderer {
    fn reset(&mut self) {
        self.body.clear();
    }

    fn render_instruction(&mut self, instruction: &RenderInstruction) {
        let paint = format!(
            "fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\" data-id=\"{}\"",
            css_color(self.palette.fill_for(instruction)),
            css_color(self.palette.stroke),
            self.palette.stroke_width,
            instruction.id,
        );
        let element = match instruction.primitive {
            Primitive::Rect(r) => format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {paint}/>\n",
                r.x0,
                r.y0,
                r.width(),
                r.height(),
            ),
            Primitive::Circle(c) => format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" {paint}/>\n",
                c.center.x, c.center.y, c.radius,
            ),
        };
        self.body.push_str(&element);
    }
}

impl RenderSink for SvgRenderer {
    fn present(&mut self, frame: &RenderFrame) {
        self.render_frame(frame);
        self.finish();
        log::trace!("SVG frame with {} shapes", frame.len());
    }
}
