//! Prismboard Render Library
//!
//! Renderers that consume the frames emitted by the whiteboard controller.
//! The default implementation uses Vello for GPU-accelerated rendering; an
//! SVG renderer is always available for headless output.

mod renderer;
mod svg;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{Palette, RenderResult, RendererError, ShapeRenderer, css_color};
pub use svg::SvgRenderer;

#[cfg(feature = "vello-renderer")]
pub use vello_impl::{VelloRenderer, WindowPresenter};
