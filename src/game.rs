//! Host contract and the Pong game
//!
//! A host owns the frame loop. Each frame it calls [`Game::update`] and then
//! [`Game::draw`]; it calls [`Game::layout`] at startup and whenever the
//! window size changes.

use crate::config::GameConfig;
use crate::renderer::{Canvas, draw_frame};
use crate::sim::{GameState, KeyState, Metrics, StepEvents, step};

/// Callbacks a host drives once per frame
pub trait Game {
    /// Advance one frame. An error ends the host loop.
    fn update(&mut self, keys: &dyn KeyState) -> anyhow::Result<()>;
    /// Draw the current frame
    fn draw(&self, canvas: &mut dyn Canvas);
    /// Logical canvas size for a window of the given outer size
    fn layout(&mut self, outer_width: u32, outer_height: u32) -> (u32, u32);
}

/// Pong, parameterized by a [`GameConfig`]
#[derive(Debug, Clone)]
pub struct Pong {
    config: GameConfig,
    state: GameState,
    /// Logical screen the next update and draw use
    screen: (u32, u32),
    last_events: StepEvents,
}

impl Pong {
    pub fn new(config: GameConfig) -> Self {
        let [w, h] = config.canvas_size;
        let screen = (w.max(1), h.max(1));
        let metrics = Metrics::new(&config, screen.0 as f32, screen.1 as f32);
        let state = GameState::new(&config, &metrics);
        Self {
            config,
            state,
            screen,
            last_events: StepEvents::default(),
        }
    }

    /// Read-only view of the game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn screen_size(&self) -> (u32, u32) {
        self.screen
    }

    /// What the most recent update did
    pub fn last_events(&self) -> StepEvents {
        self.last_events
    }

    /// Metrics for the current logical screen
    pub fn metrics(&self) -> Metrics {
        Metrics::new(&self.config, self.screen.0 as f32, self.screen.1 as f32)
    }
}

impl Game for Pong {
    fn update(&mut self, keys: &dyn KeyState) -> anyhow::Result<()> {
        let metrics = self.metrics();
        let events = step(&mut self.state, &self.config, keys, &metrics);

        if let Some(player) = events.scored {
            log::info!(
                "Player {} scores ({} - {})",
                player.number(),
                self.state.player1_score(),
                self.state.player2_score()
            );
        }
        if events.border_bounce {
            log::trace!("Border bounce at y={}", self.state.ball_pos().y);
        }
        if let Some(player) = events.paddle_hit {
            log::trace!("Paddle {} hit", player.number());
        }

        self.last_events = events;
        Ok(())
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        draw_frame(&self.state, &self.config, &self.metrics(), canvas);
    }

    fn layout(&mut self, outer_width: u32, outer_height: u32) -> (u32, u32) {
        let size = if self.config.resizable {
            (outer_width.max(1), outer_height.max(1))
        } else {
            let [w, h] = self.config.canvas_size;
            (w.max(1), h.max(1))
        };

        if size != self.screen {
            log::debug!("Logical screen {}x{} -> {}x{}", self.screen.0, self.screen.1, size.0, size.1);
            self.screen = size;
        }
        size
    }
}
