//! Rendering module
//!
//! `draw_frame` turns a read-only `GameState` into draw calls on a [`Canvas`].
//! `VertexCanvas` tessellates those calls for the WebGPU pipeline.

pub mod canvas;
pub mod font;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use canvas::VertexCanvas;
pub use font::Font;
pub use pipeline::RenderState;

use crate::config::{Color, GameConfig};
use crate::consts::{SCORE_LEFT_X, SCORE_RIGHT_X, SCORE_Y, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{GameState, Metrics, Player};

/// Drawing primitives offered by a rendering backend
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color, anti_alias: bool);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color, anti_alias: bool);
    /// Draw `text` with its baseline at `y`
    fn draw_text(&mut self, text: &str, font: &Font, x: f32, y: f32, color: Color);
}

/// Score label for one player
pub fn score_text(state: &GameState, player: Player) -> String {
    format!("Player {}: {}", player.number(), state.score(player))
}

/// Issue the draw calls for one frame
pub fn draw_frame(state: &GameState, config: &GameConfig, metrics: &Metrics, canvas: &mut dyn Canvas) {
    let (w, h) = (metrics.width, metrics.height);

    canvas.clear(config.background_color);

    if config.border_enabled {
        let b = metrics.border_thickness;
        canvas.fill_rect(0.0, 0.0, w, b, config.border_color, false);
        canvas.fill_rect(0.0, h - b, w, b, config.border_color, false);
        canvas.fill_rect(0.0, 0.0, b, h, config.border_color, false);
        canvas.fill_rect(w - b, 0.0, b, h, config.border_color, false);
    }

    canvas.fill_rect(
        metrics.left_paddle_x(),
        state.paddle1_y(),
        metrics.paddle_width,
        metrics.paddle_height,
        config.paddle_color,
        false,
    );
    canvas.fill_rect(
        metrics.right_paddle_x(),
        state.paddle2_y(),
        metrics.paddle_width,
        metrics.paddle_height,
        config.paddle_color,
        false,
    );

    let ball = state.ball_pos();
    canvas.fill_circle(ball.x, ball.y, metrics.ball_size, config.ball_color, true);

    if config.scoring_enabled {
        let font = Font::scaled_to(h);
        let sx = w / SCREEN_WIDTH as f32;
        let sy = h / SCREEN_HEIGHT as f32;
        canvas.draw_text(
            &score_text(state, Player::One),
            &font,
            SCORE_LEFT_X * sx,
            SCORE_Y * sy,
            config.score_color,
        );
        canvas.draw_text(
            &score_text(state, Player::Two),
            &font,
            SCORE_RIGHT_X * sx,
            SCORE_Y * sy,
            config.score_color,
        );
    }
}
