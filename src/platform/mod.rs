//! Native platform layer
//!
//! Owns the winit event loop and window, feeds input to the running
//! [`Game`], and presents each frame through the renderer.

pub mod clock;
pub mod game;
pub mod input;

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::error::StartupError;
use crate::renderer::RenderState;
use crate::settings::Config;

pub use game::{Flow, Game};

struct App {
    config: Config,
    game: Game,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    last_frame: Option<Instant>,
    caption: String,
    failure: Option<StartupError>,
}

impl App {
    fn new(config: Config, game: Game) -> Self {
        Self {
            config,
            game,
            window: None,
            render_state: None,
            last_frame: None,
            caption: String::new(),
            failure: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: StartupError) {
        log::error!("{}", err);
        self.failure = Some(err);
        event_loop.exit();
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map_or(0.0, |last| (now - last).as_secs_f32());
        self.last_frame = Some(now);

        let flow = self.game.update(dt);

        if let Some(render_state) = &mut self.render_state {
            match render_state.render(&self.game.scene(), &self.game.sprites) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let (w, h) = render_state.size;
                    render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("GPU out of memory");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        let caption = self.game.caption();
        if caption != self.caption {
            if let Some(window) = &self.window {
                window.set_title(&caption);
            }
            self.caption = caption;
        }

        if flow == Flow::Exit {
            log::info!("Leaving game loop: {:?}", self.game.state.phase);
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.config.play_area;
        let mut attrs = Window::default_attributes()
            .with_title(self.game.caption())
            .with_inner_size(LogicalSize::new(width, height))
            .with_resizable(false);
        if let Some((x, y)) = self.config.window_position {
            attrs = attrs.with_position(LogicalPosition::new(x, y));
        }

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, e.into()),
        };
        if self.config.hide_cursor {
            window.set_cursor_visible(false);
        }

        let size = window.inner_size();
        log::info!(
            "Window created: {}x{} @ {}x DPI",
            size.width,
            size.height,
            window.scale_factor()
        );

        match pollster::block_on(RenderState::new(window.clone(), size.width, size.height)) {
            Ok(render_state) => self.render_state = Some(render_state),
            Err(e) => return self.fail(event_loop, e.into()),
        }

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window close requested");
                self.game.input.close_requested();
            }

            WindowEvent::Resized(size) => {
                if let Some(render_state) = &mut self.render_state {
                    render_state.resize(size.width, size.height);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let scale = self.window.as_ref().map_or(1.0, |w| w.scale_factor());
                self.game
                    .input
                    .pointer_moved(position.to_logical::<f64>(scale).x);
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => self.game.input.mouse_pressed(button),

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        self.game.input.key_pressed(code);
                    }
                }
            }

            WindowEvent::RedrawRequested => self.frame(event_loop),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Load the game, open the window and run until the player leaves
pub fn run(config: Config) -> Result<(), StartupError> {
    let game = Game::load(&config)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, game);
    event_loop.run_app(&mut app)?;

    match app.failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
