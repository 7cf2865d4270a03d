//! Vello-based renderer implementation.

use crate::renderer::{Palette, RenderResult, RendererError, ShapeRenderer};
use kurbo::{Affine, Shape as KurboShape, Size, Stroke};
use peniko::{Color, Fill};
use prismboard_core::render::{Primitive, RenderFrame, RenderInstruction, RenderSink};
use vello::util::RenderSurface;
use vello::wgpu;
use vello::{AaConfig, RenderParams, RendererOptions, Scene};

/// Vello-based renderer for GPU-accelerated 2D graphics.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
    palette: Palette,
    /// Surface-to-viewport transform applied to every shape.
    transform: Affine,
    /// Drawing surface filled with the palette background before the shapes.
    surface: Option<Size>,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self::with_palette(Palette::default())
    }

    pub fn with_palette(palette: Palette) -> Self {
        Self {
            scene: Scene::new(),
            palette,
            transform: Affine::IDENTITY,
            surface: None,
        }
    }

    /// Set the transform from surface to viewport coordinates.
    pub fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    /// Paint a surface of `size` behind every frame.
    pub fn set_surface_size(&mut self, size: Size) {
        self.surface = Some(size);
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    fn draw_shape(&mut self, shape: &impl KurboShape, fill: Color) {
        self.scene
            .fill(Fill::NonZero, self.transform, fill, None, shape);
        let stroke = Stroke::new(self.palette.stroke_width);
        self.scene
            .stroke(&stroke, self.transform, self.palette.stroke, None, shape);
    }
}

impl ShapeRenderer for VelloRenderer {
    fn reset(&mut self) {
        self.scene.reset();
        if let Some(size) = self.surface {
            self.scene.fill(
                Fill::NonZero,
                self.transform,
                self.palette.background,
                None,
                &size.to_rect(),
            );
        }
    }

    fn render_instruction(&mut self, instruction: &RenderInstruction) {
        let fill = self.palette.fill_for(instruction);
        match instruction.primitive {
            Primitive::Rect(rect) => self.draw_shape(&rect, fill),
            Primitive::Circle(circle) => self.draw_shape(&circle, fill),
        }
    }
}

impl RenderSink for VelloRenderer {
    fn present(&mut self, frame: &RenderFrame) {
        self.render_frame(frame);
    }
}

/// Draws Vello scenes into a window surface.
pub struct WindowPresenter {
    renderer: vello::Renderer,
    /// Texture blitter for RGBA->surface format conversion.
    blitter: wgpu::util::TextureBlitter,
}

impl WindowPresenter {
    /// Create the GPU renderer for `surface`.
    pub fn new(device: &wgpu::Device, surface: &RenderSurface<'_>) -> RenderResult<Self> {
        let renderer = vello::Renderer::new(device, RendererOptions::default())
            .map_err(|e| RendererError::InitFailed(e.to_string()))?;
        let blitter = wgpu::util::TextureBlitter::new(device, surface.config.format);
        Ok(Self { renderer, blitter })
    }

    /// Render `scene` into the next surface texture.
    ///
    /// The returned texture is not presented yet so overlays can be drawn on top.
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface: &RenderSurface<'_>,
        scene: &Scene,
        base_color: Color,
    ) -> RenderResult<wgpu::SurfaceTexture> {
        let surface_texture = surface
            .surface
            .get_current_texture()
            .map_err(|e| RendererError::Surface(format!("{e:?}")))?;

        let width = surface.config.width;
        let height = surface.config.height;

        let params = RenderParams {
            base_color,
            width,
            height,
            antialiasing_method: AaConfig::Area,
        };

        // Vello's compute shaders need a Rgba8Unorm storage texture; the surface may be Bgra8Unorm.
        let render_texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("vello render texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::STORAGE_BINDING
                | wgpu::TextureUsages::COPY_SRC
                | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let render_view = render_texture.create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer
            .render_to_texture(device, queue, scene, &render_view, &params)
            .map_err(|e| RendererError::RenderFailed(format!("{e:?}")))?;

        let surface_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("blit encoder"),
        });
        self.blitter
            .copy(device, &mut encoder, &render_view, &surface_view);
        queue.submit(std::iter::once(encoder.finish()));

        Ok(surface_texture)
    }
}
