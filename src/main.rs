use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window as WinitWindow, WindowId},
};

use sphere_scatter::cli::Cli;
use sphere_scatter::core::{
    AnimationSession, CancelSignal, FpsCounter, FrameClock, FrameOutcome, RngSource,
    RotationAnimator, WindowDimensions,
};
use sphere_scatter::renderer::{RenderView, SceneRenderer, SurfaceErrorAction};
use sphere_scatter::window::Window;
use sphere_scatter::{PerspectiveCamera, SceneConfig, SceneState};

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;

/// Everything that lives between window creation and teardown
struct View {
    window: Window,
    renderer: SceneRenderer,
    scene: SceneState,
    camera: PerspectiveCamera,
    animator: RotationAnimator,
}

impl View {
    fn mount(event_loop: &ActiveEventLoop, config: &SceneConfig) -> anyhow::Result<Self> {
        let inner = event_loop
            .create_window(
                WinitWindow::default_attributes()
                    .with_title("Sphere Scatter")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            )
            .context("Failed to create window")?;
        let window = Window::new(Arc::new(inner));

        let seed = config.seed.unwrap_or_else(rand::random);
        info!("Sampling {} points with seed {}", config.point_count, seed);
        let mut source = RngSource(StdRng::seed_from_u64(seed));
        let scene = SceneState::build(config, &mut source);

        let renderer = pollster::block_on(SceneRenderer::new(
            window.inner().clone(),
            &scene,
            config.show_fps,
        ))
        .map_err(|e| anyhow::anyhow!("Failed to initialize renderer: {}", e))?;

        let aspect = window.dimensions().aspect_ratio().unwrap_or(1.0);
        let camera =
            PerspectiveCamera::facing_origin(config.fov_degrees, aspect, config.camera_distance);

        let session = AnimationSession::new(config.cycle_duration_ms, CancelSignal::new());
        let mut animator = RotationAnimator::new(session);
        animator.start(&window);

        Ok(Self {
            window,
            renderer,
            scene,
            camera,
            animator,
        })
    }

    fn resize(&mut self, size: WindowDimensions) {
        let Some(aspect) = size.aspect_ratio() else {
            return;
        };

        self.camera.set_aspect(aspect);
        self.renderer.resize(size);
    }
}

struct App {
    config: SceneConfig,
    view: Option<View>,
    clock: FrameClock,
    fps: FpsCounter,
}

impl App {
    fn new(config: SceneConfig) -> Self {
        Self {
            config,
            view: None,
            clock: FrameClock::new(),
            fps: FpsCounter::default(),
        }
    }

    fn unmount(&mut self) {
        if let Some(view) = &self.view {
            if view.animator.cancel() {
                info!(
                    "Animation cancelled after {} frames",
                    view.animator.frames_rendered()
                );
            }
        }
    }

    fn close(&mut self, event_loop: &ActiveEventLoop) {
        self.unmount();
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(view) = self.view.as_mut() else {
            return;
        };

        let Some(frame) = self.clock.next() else {
            return;
        };

        if let Some(fps) = self.fps.tick(frame.delta_secs()) {
            debug!("FPS: {:.1}", fps);
        }

        let mut target = RenderView {
            renderer: &mut view.renderer,
            scene: &mut view.scene,
            camera: &view.camera,
            window: view.window.inner(),
            fps: self.fps.fps(),
        };

        match view.animator.on_frame(frame.timestamp_ms, &view.window, &mut target) {
            Ok(FrameOutcome::Rendered { .. }) => {}
            Ok(FrameOutcome::Cancelled) => debug!("Frame skipped: animation cancelled"),
            Ok(FrameOutcome::Idle) => debug!("Frame skipped: animation not started"),
            Err(e) => match SurfaceErrorAction::for_error(&e) {
                SurfaceErrorAction::Reconfigure => view.renderer.reconfigure(),
                SurfaceErrorAction::Exit => {
                    error!("Render error: {}", e);
                    view.animator.cancel();
                    event_loop.exit();
                }
                SurfaceErrorAction::Report => error!("Render error: {}", e),
            },
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.view.is_some() {
            return;
        }

        match View::mount(event_loop, &self.config) {
            Ok(view) => {
                // Frame timing starts once the window and device exist
                self.clock.reset();
                self.view = Some(view);
            }
            Err(e) => {
                error!("{:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // egui sees every event; lifecycle events are never swallowed
        let consumed = self
            .view
            .as_mut()
            .is_some_and(|view| view.renderer.handle_event(view.window.inner(), &event));

        match event {
            WindowEvent::CloseRequested => self.close(event_loop),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } if !consumed => self.close(event_loop),
            WindowEvent::Resized(size) => {
                if let Some(view) = self.view.as_mut() {
                    view.resize(size.into());
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.unmount();
        self.view = None;
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.scene_config().context("Invalid scene configuration")?;

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(config);

    info!("Sphere Scatter - Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
