//! Game state and per-frame metrics
//!
//! `GameState` fields are only writable from inside `sim`; everything else
//! (the renderer, the hosts) sees it through read-only accessors.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// One of the two players. Player one owns the left paddle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1-based number used in score labels
    pub fn number(self) -> u32 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// Sizes and speeds derived from the current logical screen.
///
/// Recomputed every frame; nothing here is cached across a resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Ball radius
    pub ball_size: f32,
    pub paddle_speed: f32,
    /// Zero when the arena has no border
    pub border_thickness: f32,
    bordered: bool,
}

impl Metrics {
    pub fn new(config: &GameConfig, width: f32, height: f32) -> Self {
        let border_thickness = if config.border_enabled {
            height * config.border_thickness_ratio
        } else {
            0.0
        };

        Self {
            width,
            height,
            paddle_width: width * config.paddle_width_ratio,
            paddle_height: height * config.paddle_height_ratio,
            ball_size: height * config.ball_size_ratio,
            paddle_speed: height * config.paddle_speed_ratio,
            border_thickness,
            bordered: config.border_enabled,
        }
    }

    /// Highest allowed paddle top edge
    pub fn paddle_min_y(&self) -> f32 {
        self.border_thickness
    }

    /// Lowest allowed paddle top edge
    pub fn paddle_max_y(&self) -> f32 {
        self.height - self.paddle_height - self.border_thickness
    }

    /// Clamp a paddle top edge into the playable band.
    ///
    /// On a window too short for the paddle the top limit wins.
    pub fn clamp_paddle(&self, y: f32) -> f32 {
        y.min(self.paddle_max_y()).max(self.paddle_min_y())
    }

    /// Left edge of the left paddle
    pub fn left_paddle_x(&self) -> f32 {
        self.border_thickness
    }

    /// Left edge of the right paddle
    pub fn right_paddle_x(&self) -> f32 {
        self.width - self.border_thickness - self.paddle_width
    }

    /// Inner face of the left paddle (the side facing the ball)
    pub fn left_paddle_face(&self) -> f32 {
        self.border_thickness + self.paddle_width
    }

    /// Inner face of the right paddle
    pub fn right_paddle_face(&self) -> f32 {
        self.right_paddle_x()
    }

    /// Vertical limits for the ball centre.
    ///
    /// Bordered arenas bounce with the centre on the border line, so the
    /// ball overlaps the border (and the screen edge by `ball_size - border`)
    /// at the moment of contact. Without a border the ball radius is the
    /// margin so it stays on screen.
    pub fn ball_y_limits(&self) -> (f32, f32) {
        if self.bordered {
            (self.border_thickness, self.height - self.border_thickness)
        } else {
            (self.ball_size, self.height - self.ball_size)
        }
    }

    /// Horizontal limits past which the ball has left the field
    pub fn ball_x_limits(&self) -> (f32, f32) {
        (self.border_thickness, self.width - self.border_thickness)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub(super) paddle1_y: f32,
    pub(super) paddle2_y: f32,
    pub(super) ball_pos: Vec2,
    pub(super) ball_vel: Vec2,
    pub(super) player1_score: u32,
    pub(super) player2_score: u32,
}

impl GameState {
    /// Starting layout: paddles and ball centred, scores zero
    pub fn new(config: &GameConfig, metrics: &Metrics) -> Self {
        let paddle_y = metrics.height / 2.0 - metrics.paddle_height / 2.0;
        let [dx, dy] = config.initial_ball_velocity;
        Self {
            paddle1_y: paddle_y,
            paddle2_y: paddle_y,
            ball_pos: metrics.center(),
            ball_vel: Vec2::new(dx, dy),
            player1_score: 0,
            player2_score: 0,
        }
    }

    /// Replace ball position and velocity (scenario setup)
    #[cfg(test)]
    pub(crate) fn with_ball(mut self, pos: Vec2, vel: Vec2) -> Self {
        self.ball_pos = pos;
        self.ball_vel = vel;
        self
    }

    /// Replace both paddle positions (scenario setup, not clamped)
    #[cfg(test)]
    pub(crate) fn with_paddles(mut self, paddle1_y: f32, paddle2_y: f32) -> Self {
        self.paddle1_y = paddle1_y;
        self.paddle2_y = paddle2_y;
        self
    }

    /// Replace both scores (scenario setup)
    #[cfg(test)]
    pub(crate) fn with_scores(mut self, player1: u32, player2: u32) -> Self {
        self.player1_score = player1;
        self.player2_score = player2;
        self
    }

    pub fn paddle1_y(&self) -> f32 {
        self.paddle1_y
    }

    pub fn paddle2_y(&self) -> f32 {
        self.paddle2_y
    }

    pub fn paddle_y(&self, player: Player) -> f32 {
        match player {
            Player::One => self.paddle1_y,
            Player::Two => self.paddle2_y,
        }
    }

    pub fn ball_pos(&self) -> Vec2 {
        self.ball_pos
    }

    pub fn ball_vel(&self) -> Vec2 {
        self.ball_vel
    }

    pub fn player1_score(&self) -> u32 {
        self.player1_score
    }

    pub fn player2_score(&self) -> u32 {
        self.player2_score
    }

    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player1_score,
            Player::Two => self.player2_score,
        }
    }

    pub(super) fn paddle_y_mut(&mut self, player: Player) -> &mut f32 {
        match player {
            Player::One => &mut self.paddle1_y,
            Player::Two => &mut self.paddle2_y,
        }
    }

    pub(super) fn award_point(&mut self, player: Player) {
        match player {
            Player::One => self.player1_score += 1,
            Player::Two => self.player2_score += 1,
        }
    }
}
