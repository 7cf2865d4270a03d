//! Core application state and lifecycle.

use kurbo::{Affine, Point, Size, Vec2};
use peniko::Color;
use prismboard_core::input::PointerEvent;
use prismboard_core::render::RenderSink;
use prismboard_core::surface::{CoordinateSpace, SurfaceFrame};
use prismboard_core::tools::ToolKind;
use prismboard_core::whiteboard::{Transition, Whiteboard};
use prismboard_render::{RendererError, VelloRenderer, WindowPresenter};
use std::sync::Arc;
use thiserror::Error;
use vello::util::{RenderContext, RenderSurface};
use vello::wgpu::PresentMode;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, ModifiersState};
use winit::window::{Window, WindowId};

use crate::shortcuts::ShortcutRegistry;
use crate::ui::{UiAction, UiState, render_ui};

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("Window creation failed: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("Surface creation failed: {0}")]
    Surface(String),
    #[error(transparent)]
    Renderer(#[from] RendererError),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    /// Drawing surface width in logical pixels.
    pub width: u32,
    /// Drawing surface height in logical pixels.
    pub height: u32,
    /// Window color around the drawing surface.
    pub background_color: Color,
    /// Height of the toolbar strip above the surface.
    pub toolbar_height: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Prismboard".to_string(),
            width: 800,
            height: 600,
            background_color: Color::from_rgba8(250, 250, 250, 255),
            toolbar_height: 48.0,
        }
    }
}

impl AppConfig {
    /// Placement of the drawing surface below the toolbar.
    pub fn surface_frame(&self) -> SurfaceFrame {
        SurfaceFrame::new(
            Vec2::new(0.0, self.toolbar_height),
            Size::new(self.width as f64, self.height as f64),
        )
    }

    /// Logical window size: the surface plus the toolbar strip.
    pub fn window_size(&self) -> LogicalSize<f64> {
        LogicalSize::new(
            self.width as f64,
            self.height as f64 + self.toolbar_height,
        )
    }
}

/// Runtime state for the application.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // Rendering
    presenter: WindowPresenter,
    shape_renderer: VelloRenderer,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
    ui_state: UiState,

    // State
    board: Whiteboard,
    config: AppConfig,
    /// Last cursor position in logical viewport coordinates.
    cursor: Point,
    modifiers: ModifiersState,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: Option<RenderContext>,
    /// Fatal error raised inside the event loop.
    error: Option<AppError>,
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: None,
            error: None,
        }
    }

    /// Run the application.
    pub fn run() -> Result<(), AppError> {
        Self::new().run_app()
    }

    /// Run the event loop until the window closes.
    pub fn run_app(mut self) -> Result<(), AppError> {
        let event_loop = EventLoop::new()?;
        event_loop.run_app(&mut self)?;
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Create the window, GPU surface and renderers.
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        log::info!("Creating window...");

        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(self.config.window_size());
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let size = window.inner_size();
        log::info!("Surface size: {}x{}", size.width, size.height);

        let render_cx = self.render_cx.get_or_insert_with(RenderContext::new);
        let surface = pollster::block_on(render_cx.create_surface(
            window.clone(),
            size.width,
            size.height,
            PresentMode::AutoVsync,
        ))
        .map_err(|e| AppError::Surface(format!("{e:?}")))?;
        let device = &render_cx.devices[surface.dev_id].device;

        let presenter = WindowPresenter::new(device, &surface)?;

        // Initialize egui
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            surface.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        let board = Whiteboard::with_surface(self.config.surface_frame());
        let mut shape_renderer = VelloRenderer::new();
        shape_renderer.set_transform(surface_transform(&window, board.surface()));
        shape_renderer.set_surface_size(board.surface().size);
        shape_renderer.present(&board.render_frame());

        log::info!("Prismboard initialized - {}x{}", surface.config.width, surface.config.height);
        log::info!("Keyboard shortcuts:");
        ShortcutRegistry::log_all();

        window.request_redraw();

        self.state = Some(AppState {
            window,
            surface,
            presenter,
            shape_renderer,
            egui_ctx,
            egui_state,
            egui_renderer,
            ui_state: UiState::default(),
            board,
            config: self.config.clone(),
            cursor: Point::ZERO,
            modifiers: ModifiersState::empty(),
        });
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Transform from surface coordinates to physical window pixels.
fn surface_transform(window: &Window, frame: &SurfaceFrame) -> Affine {
    Affine::scale(window.scale_factor()) * frame.transform()
}

impl AppState {
    /// Forward a pointer event to the whiteboard and redraw if anything changed.
    fn pointer(&mut self, event: PointerEvent) {
        let transition = self
            .board
            .handle_pointer_event(event, &mut self.shape_renderer);
        if transition != Transition::Ignored {
            log::trace!("{transition:?}");
            self.window.request_redraw();
        }
    }

    fn set_tool(&mut self, tool: ToolKind) {
        self.board.set_tool(tool);
        self.ui_state.current_tool = tool;
    }

    fn redraw(&mut self, render_cx: &RenderContext) {
        // Run egui and get any actions
        self.ui_state.current_tool = self.board.tool();
        let egui_input = self.egui_state.take_egui_input(&self.window);
        let mut action = None;
        let egui_output = self.egui_ctx.run(egui_input, |ctx| {
            action = render_ui(ctx, &self.ui_state);
        });
        if let Some(UiAction::SetTool(tool)) = action {
            self.set_tool(tool);
        }

        self.egui_state
            .handle_platform_output(&self.window, egui_output.platform_output);
        let egui_primitives = self
            .egui_ctx
            .tessellate(egui_output.shapes, egui_output.pixels_per_point);

        let device_handle = &render_cx.devices[self.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        let surface_texture = match self.presenter.render(
            device,
            queue,
            &self.surface,
            self.shape_renderer.scene(),
            self.config.background_color,
        ) {
            Ok(texture) => texture,
            Err(e) => {
                log::warn!("{e}");
                return;
            }
        };

        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());

        // Update egui textures
        for (id, image_delta) in &egui_output.textures_delta.set {
            self.egui_renderer
                .update_texture(device, queue, *id, image_delta);
        }

        // Render egui on top
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface.config.width, self.surface.config.height],
            pixels_per_point: egui_output.pixels_per_point,
        };

        {
            let mut egui_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("egui encoder"),
                });

            self.egui_renderer.update_buffers(
                device,
                queue,
                &mut egui_encoder,
                &egui_primitives,
                &screen_descriptor,
            );

            let render_pass = egui_encoder.begin_render_pass(&vello::wgpu::RenderPassDescriptor {
                label: Some("egui render pass"),
                color_attachments: &[Some(vello::wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: vello::wgpu::Operations {
                        load: vello::wgpu::LoadOp::Load, // Keep Vello content
                        store: vello::wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // egui-wgpu needs a 'static render pass
            let mut render_pass = render_pass.forget_lifetime();
            self.egui_renderer
                .render(&mut render_pass, &egui_primitives, &screen_descriptor);
            drop(render_pass);

            queue.submit(std::iter::once(egui_encoder.finish()));
        }

        // Free egui textures
        for id in &egui_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
        surface_texture.present();
        self.window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        if let Err(e) = self.init(event_loop) {
            log::error!("Initialization failed: {e}");
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        // Let egui process the event first
        let egui_response = state.egui_state.on_window_event(&state.window, &event);
        let egui_wants_pointer = egui_response.consumed
            || state.egui_ctx.is_pointer_over_area()
            || state.egui_ctx.wants_pointer_input();

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }

                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }

                state.window.request_redraw();
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let transform = surface_transform(&state.window, state.board.surface());
                state.shape_renderer.set_transform(transform);
                state.shape_renderer.present(&state.board.render_frame());
                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                if let Some(render_cx) = self.render_cx.as_ref() {
                    state.redraw(render_cx);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f64>(state.window.scale_factor());
                state.cursor = Point::new(logical.x, logical.y);

                // A gesture in progress keeps receiving moves over the toolbar.
                let gesture_active = state.board.is_drawing() || state.board.selected().is_some();
                if egui_wants_pointer && !gesture_active {
                    return;
                }

                let event = PointerEvent::moved(state.cursor).in_space(CoordinateSpace::Viewport);
                state.pointer(event);
            }

            WindowEvent::MouseInput {
                state: btn_state,
                button: MouseButton::Left,
                ..
            } => match btn_state {
                ElementState::Pressed => {
                    if egui_wants_pointer {
                        return;
                    }
                    let event = state.board.with_hit_target(
                        PointerEvent::down(state.cursor).in_space(CoordinateSpace::Viewport),
                    );
                    state.pointer(event);
                }
                ElementState::Released => {
                    let event = PointerEvent::up(state.cursor).in_space(CoordinateSpace::Viewport);
                    state.pointer(event);
                }
            },

            WindowEvent::ModifiersChanged(modifiers) => {
                state.modifiers = modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if state.egui_ctx.wants_keyboard_input() || event.state != ElementState::Pressed {
                    return;
                }

                if let Key::Character(c) = &event.logical_key {
                    let ctrl = state.modifiers.control_key() || state.modifiers.super_key();
                    let shift = state.modifiers.shift_key();
                    if let Some(tool) = ShortcutRegistry::tool_for_key(c, ctrl, shift) {
                        state.set_tool(tool);
                        state.window.request_redraw();
                    }
                }
            }

            _ => {}
        }
    }
}
