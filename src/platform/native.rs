//! Native host: winit event loop and window, wgpu surface

use std::sync::Arc;

use anyhow::Context;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use super::FrameLoop;
use crate::config::GameConfig;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use crate::game::Pong;
use crate::renderer::RenderState;
use crate::sim::Key;

/// Map a physical key to a game key
pub fn key_from_code(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::KeyW => Some(Key::W),
        KeyCode::KeyS => Some(Key::S),
        KeyCode::ArrowUp => Some(Key::ArrowUp),
        KeyCode::ArrowDown => Some(Key::ArrowDown),
        _ => None,
    }
}

struct App {
    resizable: bool,
    frames: FrameLoop<Pong>,
    window: Option<Arc<Window>>,
    render: Option<RenderState>,
    /// First fatal error; the loop exits once this is set
    error: Option<anyhow::Error>,
}

impl App {
    fn new(config: GameConfig) -> Self {
        Self {
            resizable: config.resizable,
            frames: FrameLoop::new(Pong::new(config)),
            window: None,
            render: None,
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(SCREEN_WIDTH, SCREEN_HEIGHT))
            .with_resizable(self.resizable);
        let window = Arc::new(event_loop.create_window(attributes).context("create window")?);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .context("create wgpu surface")?;
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("request adapter")?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let mut render = pollster::block_on(RenderState::new(surface, &adapter, size.width, size.height))?;
        let (w, h) = self.frames.resize(size.width, size.height);
        render.set_logical_size(w, h);
        log::info!("Window {}x{}, logical canvas {}x{}", size.width, size.height, w, h);

        self.window = Some(window);
        self.render = Some(render);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        if self.error.is_none() {
            self.error = Some(err);
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(err) = self.init(event_loop) {
                self.fail(event_loop, err);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if self.window.as_ref().map(|w| w.id()) != Some(window_id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(render) = self.render.as_mut() {
                    render.resize(size.width, size.height);
                    let (w, h) = self.frames.resize(size.width, size.height);
                    render.set_logical_size(w, h);
                }
            }
            WindowEvent::Focused(false) => self.frames.keys.clear(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => {
                if let Some(key) = key_from_code(code) {
                    match state {
                        ElementState::Pressed => self.frames.keys.press(key),
                        ElementState::Released => self.frames.keys.release(key),
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                let Some(render) = self.render.as_mut() else { return };
                if let Err(err) = self.frames.frame(render) {
                    self.fail(event_loop, err);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Open the window and run until it is closed
pub fn run(config: GameConfig) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("create event loop")?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app).context("run event loop")?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
