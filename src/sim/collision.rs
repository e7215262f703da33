//! Collision detection and response
//!
//! Axis-aligned tests only: the ball is a circle of radius `ball_size`,
//! paddles and borders are rectangles. All contact tests are inclusive, so a
//! ball exactly touching a surface counts as a hit.

use glam::Vec2;

use super::state::{Metrics, Player};

/// Side of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Player defending this side
    pub fn owner(self) -> Player {
        match self {
            Side::Left => Player::One,
            Side::Right => Player::Two,
        }
    }

    /// Player credited when the ball leaves through this side
    pub fn scorer(self) -> Player {
        self.owner().opponent()
    }
}

/// Which side, if any, the ball has left the field through
pub fn ball_exit(ball_pos: Vec2, metrics: &Metrics) -> Option<Side> {
    let (left, right) = metrics.ball_x_limits();
    if ball_pos.x < left {
        Some(Side::Left)
    } else if ball_pos.x > right {
        Some(Side::Right)
    } else {
        None
    }
}

/// Bounce off the top or bottom limit.
///
/// Clamps the ball onto the limit it crossed and inverts the vertical
/// velocity. Returns true on a bounce.
pub fn bounce_off_borders(pos: &mut Vec2, vel: &mut Vec2, metrics: &Metrics) -> bool {
    let (top, bottom) = metrics.ball_y_limits();
    if pos.y <= top {
        pos.y = top;
    } else if pos.y >= bottom {
        pos.y = bottom;
    } else {
        return false;
    }
    vel.y *= -1.0;
    true
}

/// Whether the ball overlaps a paddle's inner face.
///
/// The ball's whole vertical extent must lie within the paddle.
pub fn paddle_hit(side: Side, ball_pos: Vec2, paddle_y: f32, metrics: &Metrics) -> bool {
    let r = metrics.ball_size;
    let crosses_face = match side {
        Side::Left => ball_pos.x - r <= metrics.left_paddle_face(),
        Side::Right => ball_pos.x + r >= metrics.right_paddle_face(),
    };
    crosses_face
        && ball_pos.y - r >= paddle_y
        && ball_pos.y + r <= paddle_y + metrics.paddle_height
}

/// Reverse horizontal direction and put the ball flush against the face,
/// so the next frame starts clear of the paddle
pub fn bounce_off_paddle(side: Side, pos: &mut Vec2, vel: &mut Vec2, metrics: &Metrics) {
    vel.x *= -1.0;
    pos.x = match side {
        Side::Left => metrics.left_paddle_face() + metrics.ball_size,
        Side::Right => metrics.right_paddle_face() - metrics.ball_size,
    };
}
