//! Game configuration and variant presets
//!
//! Everything the simulation and renderer treat as a constant for a run lives
//! here. Sizes are stored as ratios of the logical screen so the same numbers
//! serve the fixed 640x480 canvas and the resizable window.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::input::Key;

/// The five incremental builds of the game, from a still frame to the
/// responsive bordered version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Paddles and ball drawn, nothing moves
    Static,
    /// Ball moves and bounces, paddles are fixed
    Bounce,
    /// Both paddles follow the keyboard
    Paddles,
    /// Ball exits score a point for the other player
    Scoring,
    /// Bordered arena, everything scales with the window
    #[default]
    Responsive,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Static,
        Variant::Bounce,
        Variant::Paddles,
        Variant::Scoring,
        Variant::Responsive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Static => "static",
            Variant::Bounce => "bounce",
            Variant::Paddles => "paddles",
            Variant::Scoring => "scoring",
            Variant::Responsive => "responsive",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "static" => Some(Variant::Static),
            "bounce" => Some(Variant::Bounce),
            "paddles" | "input" => Some(Variant::Paddles),
            "scoring" | "score" => Some(Variant::Scoring),
            "responsive" | "resizable" => Some(Variant::Responsive),
            _ => None,
        }
    }
}

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Normalized components for the GPU
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Up/down keys for one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleBindings {
    pub up: Key,
    pub down: Key,
}

impl PaddleBindings {
    pub const LEFT: PaddleBindings = PaddleBindings {
        up: Key::W,
        down: Key::S,
    };
    pub const RIGHT: PaddleBindings = PaddleBindings {
        up: Key::ArrowUp,
        down: Key::ArrowDown,
    };
}

/// Immutable per-run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Colors ===
    pub paddle_color: Color,
    pub ball_color: Color,
    pub border_color: Color,
    pub score_color: Color,
    pub background_color: Color,

    // === Proportions ===
    /// Paddle width as a fraction of screen width
    pub paddle_width_ratio: f32,
    /// Paddle height as a fraction of screen height
    pub paddle_height_ratio: f32,
    /// Ball radius as a fraction of screen height
    pub ball_size_ratio: f32,
    /// Paddle travel per frame as a fraction of screen height
    pub paddle_speed_ratio: f32,
    /// Border thickness as a fraction of screen height
    pub border_thickness_ratio: f32,

    /// Ball velocity at startup, pixels per frame
    pub initial_ball_velocity: [f32; 2],

    // === Features ===
    pub ball_motion_enabled: bool,
    pub input_enabled: bool,
    pub scoring_enabled: bool,
    pub border_enabled: bool,
    pub resizable: bool,

    // === Controls ===
    pub left_paddle: PaddleBindings,
    pub right_paddle: PaddleBindings,

    /// Logical canvas reported by the fixed-size variants
    pub canvas_size: [u32; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::preset(Variant::default())
    }
}

impl GameConfig {
    /// Configuration reproducing one of the five builds
    pub fn preset(variant: Variant) -> Self {
        let (motion, input, scoring, border, resizable) = match variant {
            Variant::Static => (false, false, false, false, false),
            Variant::Bounce => (true, false, false, false, false),
            Variant::Paddles => (true, true, false, false, false),
            Variant::Scoring => (true, true, true, false, false),
            Variant::Responsive => (true, true, true, true, true),
        };

        let width = SCREEN_WIDTH as f32;
        let height = SCREEN_HEIGHT as f32;

        Self {
            paddle_color: Color::WHITE,
            ball_color: Color::WHITE,
            border_color: Color::WHITE,
            score_color: Color::WHITE,
            background_color: Color::BLACK,

            paddle_width_ratio: PADDLE_WIDTH / width,
            paddle_height_ratio: PADDLE_HEIGHT / height,
            ball_size_ratio: BALL_SIZE / height,
            paddle_speed_ratio: PADDLE_SPEED / height,
            border_thickness_ratio: BORDER_THICKNESS_RATIO,

            initial_ball_velocity: [BALL_START_DX, BALL_START_DY],

            ball_motion_enabled: motion,
            input_enabled: input,
            scoring_enabled: scoring,
            border_enabled: border,
            resizable,

            left_paddle: PaddleBindings::LEFT,
            right_paddle: PaddleBindings::RIGHT,

            canvas_size: [SCREEN_WIDTH, SCREEN_HEIGHT],
        }
    }

    /// Parse a JSON config.
    ///
    /// A `"variant"` key selects the preset the remaining keys override;
    /// without it the keys override the default preset.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut value: serde_json::Value = serde_json::from_str(json)?;
        let overrides = value.as_object_mut().ok_or(ConfigError::NotAnObject)?;

        let variant = match overrides.remove("variant") {
            Some(serde_json::Value::String(name)) => {
                Variant::from_str(&name).ok_or(ConfigError::UnknownVariant(name))?
            }
            Some(other) => return Err(ConfigError::UnknownVariant(other.to_string())),
            None => Variant::default(),
        };

        let mut merged = serde_json::to_value(Self::preset(variant))?;
        if let Some(base) = merged.as_object_mut() {
            for (key, value) in std::mem::take(overrides) {
                base.insert(key, value);
            }
        }

        Ok(serde_json::from_value(merged)?)
    }
}

/// Error loading a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config must be a JSON object")]
    NotAnObject,
    #[error("unknown variant: {0}")]
    UnknownVariant(String),
}
