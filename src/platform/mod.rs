//! Platform layer
//!
//! Hosts for each target:
//! - `native`: winit window, wgpu surface, keyboard via `KeyCode`
//! - `web`: canvas element, requestAnimationFrame, keyboard via `KeyboardEvent.code`
//!
//! Both drive the game through [`FrameLoop`].

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::game::Game;
use crate::renderer::{RenderState, VertexCanvas};
use crate::sim::HeldKeys;

/// Per-frame sequencing shared by every host: layout on resize, then
/// update, draw and present once per frame
pub struct FrameLoop<G: Game> {
    pub game: G,
    pub keys: HeldKeys,
    canvas: VertexCanvas,
    logical: (u32, u32),
}

impl<G: Game> FrameLoop<G> {
    pub fn new(game: G) -> Self {
        Self {
            game,
            keys: HeldKeys::new(),
            canvas: VertexCanvas::new(),
            logical: (1, 1),
        }
    }

    /// Report a new outer window size; returns the logical canvas size
    pub fn resize(&mut self, outer_width: u32, outer_height: u32) -> (u32, u32) {
        self.logical = self.game.layout(outer_width, outer_height);
        self.logical
    }

    pub fn logical_size(&self) -> (u32, u32) {
        self.logical
    }

    /// Update then draw, without touching the GPU
    pub fn tick(&mut self) -> anyhow::Result<&VertexCanvas> {
        self.game.update(&self.keys)?;
        self.game.draw(&mut self.canvas);
        Ok(&self.canvas)
    }

    /// Run one full frame. An error means the host should stop.
    pub fn frame(&mut self, render: &mut RenderState) -> anyhow::Result<()> {
        self.tick()?;
        render.set_logical_size(self.logical.0, self.logical.1);

        match render.render(&self.canvas) {
            Ok(()) => Ok(()),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render.reconfigure();
                Ok(())
            }
            Err(wgpu::SurfaceError::OutOfMemory) => Err(anyhow::anyhow!("GPU out of memory")),
            Err(e) => {
                log::warn!("Render error: {:?}", e);
                Ok(())
            }
        }
    }
}
