use std::path::PathBuf;

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use samovar_engine::coords::Viewport;
use samovar_engine::device::{Gpu, GpuInit, SurfaceErrorAction};
use samovar_engine::render::{RenderCtx, RenderTarget, Teapot};

/// Background clear color (≈ sRGB 114/144/154, in linear space).
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.167,
    g: 0.278,
    b: 0.323,
    a: 1.0,
};

/// Radians of camera orbit per logical pixel of drag.
const DRAG_SENSITIVITY: f32 = 0.005;

/// Object rotation step per arrow-key press, radians.
const KEY_ROTATE_STEP: f32 = 0.05;

/// Zoom change per scroll line / per hundred scroll pixels.
const WHEEL_LINE_ZOOM: f32 = 0.05;

/// Runs the viewer until the window closes or startup fails.
pub fn run(asset_dir: PathBuf) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
    let mut app = ViewerApp::new(asset_dir);

    event_loop
        .run_app(&mut app)
        .context("winit event loop terminated with error")?;

    match app.startup_error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct ViewerApp {
    asset_dir: PathBuf,
    entry: Option<WindowEntry>,
    teapot: Teapot,

    cursor: Option<(f64, f64)>,
    dragging: bool,

    /// Set when initialization fails; reported after the loop exits.
    startup_error: Option<anyhow::Error>,
}

impl ViewerApp {
    fn new(asset_dir: PathBuf) -> Self {
        Self {
            asset_dir,
            entry: None,
            teapot: Teapot::new(),
            cursor: None,
            dragging: false,
            startup_error: None,
        }
    }
}

fn render_ctx<'a>(gpu: &'a Gpu<'_>) -> RenderCtx<'a> {
    let size = gpu.size();
    RenderCtx::new(
        gpu.device(),
        gpu.queue(),
        gpu.surface_format(),
        gpu.depth_format(),
        Viewport::new(size.width, size.height),
    )
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("samovar")
            .with_inner_size(LogicalSize::new(1280.0, 800.0));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => w,
            Err(e) => {
                log::error!("failed to create window: {e}");
                self.startup_error = Some(anyhow::Error::new(e).context("window creation"));
                event_loop.exit();
                return;
            }
        };

        let entry = WindowEntryBuilder {
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, GpuInit::default()))
                    .expect("GPU initialization failed for window")
            },
        }
        .build();

        // Initialize the teapot once the context exists. A failure here is
        // fatal: the render loop must not start with a half-armed renderer.
        let teapot = &mut self.teapot;
        let asset_dir = self.asset_dir.as_path();
        let init_result = entry.with_gpu(|gpu| {
            let rctx = render_ctx(gpu);
            teapot.init(&rctx, gpu.profile(), asset_dir)
        });

        if let Err(e) = init_result {
            log::error!("teapot initialization failed: {e:#}");
            self.startup_error = Some(e);
            event_loop.exit();
            return;
        }

        entry.with_window(|w| w.request_redraw());
        self.entry = Some(entry);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: buffered input is applied once per drawn frame.
        if let Some(entry) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.entry.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if key_event.state != ElementState::Pressed {
                    return;
                }
                match key_event.physical_key {
                    PhysicalKey::Code(KeyCode::Escape) => event_loop.exit(),
                    PhysicalKey::Code(KeyCode::ArrowLeft) => {
                        self.teapot.rotate_by(-KEY_ROTATE_STEP, 0.0);
                    }
                    PhysicalKey::Code(KeyCode::ArrowRight) => {
                        self.teapot.rotate_by(KEY_ROTATE_STEP, 0.0);
                    }
                    PhysicalKey::Code(KeyCode::ArrowUp) => {
                        self.teapot.rotate_by(0.0, KEY_ROTATE_STEP);
                    }
                    PhysicalKey::Code(KeyCode::ArrowDown) => {
                        self.teapot.rotate_by(0.0, -KEY_ROTATE_STEP);
                    }
                    PhysicalKey::Code(KeyCode::KeyR) => {
                        // Reset both orbits to the home view.
                        self.teapot.rotate_to(0.0);
                        self.teapot.rotate_camera_to(0.0);
                    }
                    _ => {}
                }
            }

            WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                self.dragging = state == ElementState::Pressed;
            }

            WindowEvent::CursorMoved { position, .. } => {
                let pos = (position.x, position.y);
                if self.dragging {
                    if let Some(prev) = self.cursor {
                        // Drag deltas are measured against the previous
                        // sample, matching pointer motion exactly.
                        self.teapot.rotate_camera_by(
                            (prev.0 - pos.0) as f32 * DRAG_SENSITIVITY,
                            (prev.1 - pos.1) as f32 * DRAG_SENSITIVITY,
                        );
                    }
                }
                self.cursor = Some(pos);
            }

            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                self.dragging = false;
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let dzoom = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y * WHEEL_LINE_ZOOM,
                    MouseScrollDelta::PixelDelta(p) => (p.y / 100.0) as f32,
                };
                if dzoom.abs() > 0.001 {
                    self.teapot.zoom_by(dzoom);
                }
            }

            WindowEvent::RedrawRequested => {
                let Some(entry) = self.entry.as_mut() else { return };
                let teapot = &mut self.teapot;
                let mut fatal = false;

                entry.with_mut(|fields| {
                    let gpu: &mut Gpu<'_> = fields.gpu;

                    let mut frame = match gpu.begin_frame() {
                        Ok(f) => f,
                        Err(err) => {
                            match gpu.handle_surface_error(err) {
                                SurfaceErrorAction::Fatal => fatal = true,
                                SurfaceErrorAction::Reconfigured
                                | SurfaceErrorAction::SkipFrame => {}
                            }
                            return;
                        }
                    };

                    // Clear pass — dropped before the encoder records the
                    // teapot pass.
                    {
                        let _rpass =
                            frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                                label: Some("samovar clear"),
                                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                                    view: &frame.view,
                                    resolve_target: None,
                                    ops: wgpu::Operations {
                                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                                        store: wgpu::StoreOp::Store,
                                    },
                                    depth_slice: None,
                                })],
                                depth_stencil_attachment: None,
                                timestamp_writes: None,
                                occlusion_query_set: None,
                                multiview_mask: None,
                            });
                    }

                    let rctx = render_ctx(gpu);
                    {
                        let mut target = RenderTarget::new(
                            &mut frame.encoder,
                            &frame.view,
                            &frame.depth_view,
                        );
                        teapot.draw(&rctx, &mut target);
                    }

                    fields.window.pre_present_notify();
                    gpu.submit(frame);
                });

                if fatal {
                    log::error!("surface ran out of memory; exiting");
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }
}
