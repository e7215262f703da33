//! Browser host: `<canvas id="canvas">`, requestAnimationFrame, DOM key events

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, anyhow};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent};

use super::FrameLoop;
use crate::config::GameConfig;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use crate::game::Pong;
use crate::renderer::RenderState;
use crate::sim::Key;

/// Element holding an optional inline JSON config
const CONFIG_ELEMENT_ID: &str = "pong-config";
const CANVAS_ELEMENT_ID: &str = "canvas";

struct Host {
    frames: FrameLoop<Pong>,
    render: RenderState,
    canvas: HtmlCanvasElement,
}

impl Host {
    /// Match the drawing buffer to the element's CSS size. Fixed-size
    /// variants keep their logical canvas and are letterboxed.
    fn sync_size(&mut self) {
        let (width, height) = canvas_pixel_size(&self.canvas);
        if (width, height) == self.render.size || width == 0 || height == 0 {
            return;
        }

        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.render.resize(width, height);
        let (w, h) = self.frames.resize(width, height);
        self.render.set_logical_size(w, h);
        log::debug!("Canvas resized to {}x{}", width, height);
    }
}

fn canvas_pixel_size(canvas: &HtmlCanvasElement) -> (u32, u32) {
    let dpr = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    (
        (canvas.client_width() as f64 * dpr) as u32,
        (canvas.client_height() as f64 * dpr) as u32,
    )
}

/// Config from the page, falling back to the default on a bad block
fn load_config(document: &web_sys::Document) -> GameConfig {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return GameConfig::default();
    };

    match GameConfig::from_json(&json) {
        Ok(config) => {
            log::info!("Loaded config from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Err(e) => {
            log::warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            GameConfig::default()
        }
    }
}

pub async fn run() -> anyhow::Result<()> {
    let window = web_sys::window().context("no window")?;
    let document = window.document().context("no document")?;
    document.set_title(WINDOW_TITLE);

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ELEMENT_ID)
        .context("no canvas element")?
        .dyn_into()
        .map_err(|_| anyhow!("#{} is not a canvas", CANVAS_ELEMENT_ID))?;

    let config = load_config(&document);
    log::debug!(
        "Config: {}",
        serde_json::to_string(&config).unwrap_or_default()
    );

    let (width, height) = match canvas_pixel_size(&canvas) {
        (0, _) | (_, 0) => (SCREEN_WIDTH, SCREEN_HEIGHT),
        size => size,
    };
    canvas.set_width(width);
    canvas.set_height(height);

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
        ..Default::default()
    });
    let surface = instance
        .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
        .context("create wgpu surface")?;
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .context("request adapter")?;
    log::info!("Using adapter: {:?}", adapter.get_info().name);

    let mut render = RenderState::new(surface, &adapter, width, height).await?;
    let mut frames = FrameLoop::new(Pong::new(config));
    let (w, h) = frames.resize(width, height);
    render.set_logical_size(w, h);

    let host = Rc::new(RefCell::new(Host {
        frames,
        render,
        canvas,
    }));

    setup_keyboard(&window, host.clone());
    request_animation_frame(host);

    log::info!("Pong running!");
    Ok(())
}

fn setup_keyboard(window: &web_sys::Window, host: Rc<RefCell<Host>>) {
    for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
        let host = host.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let Some(key) = Key::from_code(&event.code()) else { return };
            // arrows would scroll the page
            event.prevent_default();
            let keys = &mut host.borrow_mut().frames.keys;
            if pressed {
                keys.press(key);
            } else {
                keys.release(key);
            }
        });
        let _ = window.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // releases are lost while the tab is unfocused
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        host.borrow_mut().frames.keys.clear();
    });
    let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn request_animation_frame(host: Rc<RefCell<Host>>) {
    let Some(window) = web_sys::window() else { return };
    let closure = Closure::once(move |_time: f64| {
        game_loop(host);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn game_loop(host: Rc<RefCell<Host>>) {
    {
        let mut h = host.borrow_mut();
        h.sync_size();
        let Host { frames, render, .. } = &mut *h;
        if let Err(e) = frames.frame(render) {
            log::error!("Pong stopped: {:#}", e);
            return;
        }
    }

    request_animation_frame(host);
}
