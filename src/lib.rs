//! Pong - two paddles, one ball
//!
//! Core modules:
//! - `sim`: Per-frame simulation (paddles, ball, collisions, scores)
//! - `renderer`: Draw-call translation and the WebGPU pipeline behind it
//! - `game`: Host contract (update / draw / layout) and the Pong implementation
//! - `platform`: Native (winit) and browser hosts
//! - `config`: Immutable game configuration and variant presets

pub mod config;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{Color, GameConfig, PaddleBindings, Variant};
pub use game::{Game, Pong};

/// Game configuration constants
pub mod consts {
    /// Window title
    pub const WINDOW_TITLE: &str = "Pong";

    /// Logical canvas for the fixed-size variants, also the initial window size
    pub const SCREEN_WIDTH: u32 = 640;
    pub const SCREEN_HEIGHT: u32 = 480;

    /// Paddle defaults (pixels at the reference canvas)
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Pixels per frame while a movement key is held
    pub const PADDLE_SPEED: f32 = 5.0;

    /// Ball radius (pixels at the reference canvas)
    pub const BALL_SIZE: f32 = 10.0;
    /// Per-frame launch velocity
    pub const BALL_START_DX: f32 = 3.0;
    pub const BALL_START_DY: f32 = 3.0;

    /// Border thickness as a fraction of screen height
    pub const BORDER_THICKNESS_RATIO: f32 = 0.02;

    /// Score label anchors (baseline, pixels at the reference canvas)
    pub const SCORE_LEFT_X: f32 = 20.0;
    pub const SCORE_RIGHT_X: f32 = 460.0;
    pub const SCORE_Y: f32 = 20.0;
}
