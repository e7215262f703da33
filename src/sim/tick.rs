//! Per-frame simulation step
//!
//! Advances the game by exactly one frame. Called once per host update,
//! before the frame is drawn.

use super::collision::{Side, ball_exit, bounce_off_borders, bounce_off_paddle, paddle_hit};
use super::input::KeyState;
use super::state::{GameState, Metrics, Player};
use crate::config::{GameConfig, PaddleBindings};

/// What happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepEvents {
    /// Player credited with a point this frame
    pub scored: Option<Player>,
    /// Ball returned to the centre after leaving the field
    pub ball_reset: bool,
    /// Ball bounced off the top or bottom
    pub border_bounce: bool,
    /// Owner of the paddle the ball bounced off
    pub paddle_hit: Option<Player>,
}

/// Advance the game state by one frame.
///
/// `metrics` must be built from the current logical screen size; in the
/// resizable variant it changes whenever the window does.
pub fn step(
    state: &mut GameState,
    config: &GameConfig,
    keys: &dyn KeyState,
    metrics: &Metrics,
) -> StepEvents {
    let mut events = StepEvents::default();

    if config.ball_motion_enabled {
        state.ball_pos += state.ball_vel;
    }

    clamp_paddles(state, metrics);

    if config.ball_motion_enabled {
        if let Some(side) = ball_exit(state.ball_pos, metrics) {
            if config.scoring_enabled {
                let scorer = side.scorer();
                state.award_point(scorer);
                events.scored = Some(scorer);
            }
            state.ball_pos = metrics.center();
            events.ball_reset = true;
        }

        events.border_bounce = bounce_off_borders(&mut state.ball_pos, &mut state.ball_vel, metrics);

        for side in [Side::Left, Side::Right] {
            let paddle_y = state.paddle_y(side.owner());
            if paddle_hit(side, state.ball_pos, paddle_y, metrics) {
                bounce_off_paddle(side, &mut state.ball_pos, &mut state.ball_vel, metrics);
                events.paddle_hit = Some(side.owner());
            }
        }
    }

    if config.input_enabled {
        move_paddle(state, Player::One, &config.left_paddle, keys, metrics);
        move_paddle(state, Player::Two, &config.right_paddle, keys, metrics);
        clamp_paddles(state, metrics);
    }

    events
}

fn clamp_paddles(state: &mut GameState, metrics: &Metrics) {
    state.paddle1_y = metrics.clamp_paddle(state.paddle1_y);
    state.paddle2_y = metrics.clamp_paddle(state.paddle2_y);
}

fn move_paddle(
    state: &mut GameState,
    player: Player,
    bindings: &PaddleBindings,
    keys: &dyn KeyState,
    metrics: &Metrics,
) {
    let paddle_y = state.paddle_y_mut(player);
    if keys.is_pressed(bindings.up) {
        *paddle_y -= metrics.paddle_speed;
    }
    if keys.is_pressed(bindings.down) {
        *paddle_y += metrics.paddle_speed;
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use proptest::prelude::*;

    use super::*;
    use crate::config::Variant;
    use crate::sim::input::{HeldKeys, Key, NoKeys};

    fn setup(variant: Variant, width: f32, height: f32) -> (GameConfig, Metrics, GameState) {
        let config = GameConfig::preset(variant);
        let metrics = Metrics::new(&config, width, height);
        let state = GameState::new(&config, &metrics);
        (config, metrics, state)
    }

    fn held(keys: &[Key]) -> HeldKeys {
        let mut held = HeldKeys::new();
        for &key in keys {
            held.press(key);
        }
        held
    }

    #[test]
    fn test_ball_integrates_velocity() {
        let (config, metrics, mut state) = setup(Variant::Bounce, 640.0, 480.0);
        step(&mut state, &config, &NoKeys, &metrics);
        assert_eq!(state.ball_pos(), Vec2::new(323.0, 243.0));
        assert_eq!(state.ball_vel(), Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_static_variant_freezes_ball() {
        let (config, metrics, mut state) = setup(Variant::Static, 640.0, 480.0);
        let before = state.clone();
        let events = step(&mut state, &config, &held(&[Key::W]), &metrics);
        assert_eq!(state, before);
        assert_eq!(events, StepEvents::default());
    }

    #[test]
    fn test_left_exit_resets_and_scores() {
        let (config, metrics, state) = setup(Variant::Scoring, 640.0, 480.0);
        let mut state = state.with_ball(Vec2::new(-1.0, 240.0), Vec2::new(-3.0, 3.0));

        let events = step(&mut state, &config, &NoKeys, &metrics);

        assert_eq!(state.player2_score(), 1);
        assert_eq!(state.player1_score(), 0);
        assert_eq!(state.ball_pos(), Vec2::new(320.0, 240.0));
        assert_eq!(state.ball_vel(), Vec2::new(-3.0, 3.0));
        assert_eq!(events.scored, Some(Player::Two));
        assert!(events.ball_reset);
    }

    #[test]
    fn test_right_exit_scores_player_one() {
        let (config, metrics, state) = setup(Variant::Responsive, 640.0, 480.0);
        let mut state = state.with_ball(Vec2::new(638.0, 100.0), Vec2::new(3.0, -3.0));

        let events = step(&mut state, &config, &NoKeys, &metrics);

        assert_eq!(state.player1_score(), 1);
        assert_eq!(events.scored, Some(Player::One));
        assert_eq!(state.ball_pos(), metrics.center());
        assert_eq!(state.ball_vel(), Vec2::new(3.0, -3.0));
    }

    #[test]
    fn test_exit_without_scoring_only_resets() {
        let (config, metrics, state) = setup(Variant::Paddles, 640.0, 480.0);
        let mut state = state.with_ball(Vec2::new(639.0, 100.0), Vec2::new(3.0, 3.0));

        let events = step(&mut state, &config, &NoKeys, &metrics);

        assert_eq!(events.scored, None);
        assert!(events.ball_reset);
        assert_eq!(state.ball_pos(), Vec2::new(320.0, 240.0));
        assert_eq!((state.player1_score(), state.player2_score()), (0, 0));
    }

    #[test]
    fn test_top_border_bounce() {
        let (config, metrics, state) = setup(Variant::Responsive, 640.0, 480.0);
        let border = metrics.border_thickness;
        let mut state = state.with_ball(Vec2::new(320.0, border + 1.0), Vec2::new(3.0, -2.0));

        let events = step(&mut state, &config, &NoKeys, &metrics);

        assert!(events.border_bounce);
        assert_eq!(state.ball_pos().y, border);
        assert_eq!(state.ball_vel().y, 2.0);
    }

    #[test]
    fn test_bottom_border_bounce() {
        let (config, metrics, state) = setup(Variant::Responsive, 640.0, 480.0);
        let bottom = 480.0 - metrics.border_thickness;
        let mut state = state.with_ball(Vec2::new(320.0, bottom - 1.0), Vec2::new(3.0, 2.0));

        step(&mut state, &config, &NoKeys, &metrics);

        assert_eq!(state.ball_pos().y, bottom);
        assert_eq!(state.ball_vel().y, -2.0);
    }

    #[test]
    fn test_left_paddle_bounce_does_not_stick() {
        let (config, metrics, state) = setup(Variant::Responsive, 640.0, 480.0);
        let touching = metrics.left_paddle_face() + metrics.ball_size;
        let mut state = state
            .with_paddles(190.0, 190.0)
            .with_ball(Vec2::new(touching, 240.0), Vec2::new(-3.0, 0.0));

        let events = step(&mut state, &config, &NoKeys, &metrics);
        assert_eq!(events.paddle_hit, Some(Player::One));
        assert_eq!(state.ball_vel().x, 3.0);
        assert_eq!(
            state.ball_pos().x,
            metrics.border_thickness + metrics.paddle_width + metrics.ball_size
        );

        let events = step(&mut state, &config, &NoKeys, &metrics);
        assert_eq!(events.paddle_hit, None);
        assert_eq!(state.ball_vel().x, 3.0);
        assert!(state.ball_pos().x > touching);
    }

    #[test]
    fn test_right_paddle_bounce() {
        let (config, metrics, state) = setup(Variant::Scoring, 640.0, 480.0);
        let mut state = state
            .with_paddles(190.0, 190.0)
            .with_ball(Vec2::new(618.0, 240.0), Vec2::new(3.0, 0.0));

        let events = step(&mut state, &config, &NoKeys, &metrics);

        assert_eq!(events.paddle_hit, Some(Player::Two));
        assert_eq!(state.ball_vel().x, -3.0);
        assert_eq!(state.ball_pos().x, 630.0 - metrics.ball_size);
    }

    #[test]
    fn test_ball_beside_paddle_passes() {
        let (config, metrics, state) = setup(Variant::Scoring, 640.0, 480.0);
        // paddle pushed to the top, ball arrives low on the left
        let mut state = state
            .with_paddles(0.0, 0.0)
            .with_ball(Vec2::new(22.0, 400.0), Vec2::new(-3.0, 0.0));

        let events = step(&mut state, &config, &NoKeys, &metrics);
        assert_eq!(events.paddle_hit, None);
        assert_eq!(state.ball_vel().x, -3.0);
    }

    #[test]
    fn test_keys_move_paddles() {
        let (config, metrics, mut state) = setup(Variant::Paddles, 640.0, 480.0);
        let start = state.paddle1_y();

        step(&mut state, &config, &held(&[Key::W, Key::ArrowDown]), &metrics);

        assert_eq!(state.paddle1_y(), start - metrics.paddle_speed);
        assert_eq!(state.paddle2_y(), start + metrics.paddle_speed);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let (config, metrics, mut state) = setup(Variant::Paddles, 640.0, 480.0);
        let start = state.paddle2_y();
        step(&mut state, &config, &held(&[Key::ArrowUp, Key::ArrowDown]), &metrics);
        assert!((state.paddle2_y() - start).abs() < 1e-4);
    }

    #[test]
    fn test_held_key_never_pushes_paddle_off_screen() {
        let (config, metrics, mut state) = setup(Variant::Responsive, 640.0, 480.0);
        let keys = held(&[Key::S, Key::ArrowUp]);
        for _ in 0..200 {
            step(&mut state, &config, &keys, &metrics);
        }
        assert_eq!(state.paddle1_y(), metrics.paddle_max_y());
        assert_eq!(state.paddle2_y(), metrics.paddle_min_y());
    }

    #[test]
    fn test_input_disabled_ignores_keys() {
        let (config, metrics, mut state) = setup(Variant::Bounce, 640.0, 480.0);
        let start = state.paddle1_y();
        step(&mut state, &config, &held(&[Key::W, Key::ArrowUp]), &metrics);
        assert_eq!(state.paddle1_y(), start);
        assert_eq!(state.paddle2_y(), start);
    }

    #[test]
    fn test_resize_doubles_metrics_exactly() {
        let config = GameConfig::default();
        let small = Metrics::new(&config, 640.0, 480.0);
        let large = Metrics::new(&config, 1280.0, 960.0);

        assert_eq!(large.paddle_width, small.paddle_width * 2.0);
        assert_eq!(large.paddle_height, small.paddle_height * 2.0);
        assert_eq!(large.ball_size, small.ball_size * 2.0);
        assert_eq!(large.paddle_speed, small.paddle_speed * 2.0);
        assert_eq!(large.border_thickness, small.border_thickness * 2.0);
    }

    #[test]
    fn test_paddles_stay_clamped_across_resize() {
        let config = GameConfig::default();
        let small = Metrics::new(&config, 640.0, 480.0);
        let large = Metrics::new(&config, 1280.0, 960.0);
        let mut state = GameState::new(&config, &small).with_paddles(-100.0, 1000.0);

        step(&mut state, &config, &NoKeys, &small);
        assert_eq!(state.paddle1_y(), small.paddle_min_y());
        assert_eq!(state.paddle2_y(), small.paddle_max_y());

        step(&mut state, &config, &NoKeys, &large);
        for y in [state.paddle1_y(), state.paddle2_y()] {
            assert!(y >= large.paddle_min_y() && y <= large.paddle_max_y());
        }

        // shrinking back pulls the low paddle up into the smaller band
        let mut state = state.with_paddles(large.paddle_max_y(), large.paddle_max_y());
        step(&mut state, &config, &NoKeys, &small);
        assert_eq!(state.paddle1_y(), small.paddle_max_y());
    }

    #[test]
    fn test_determinism() {
        let (config, metrics, mut state1) = setup(Variant::Responsive, 640.0, 480.0);
        let mut state2 = state1.clone();
        let inputs = [held(&[Key::W]), held(&[]), held(&[Key::ArrowDown, Key::S])];

        for _ in 0..100 {
            for keys in &inputs {
                step(&mut state1, &config, keys, &metrics);
                step(&mut state2, &config, keys, &metrics);
            }
        }
        assert_eq!(state1, state2);
    }

    fn key_frames() -> impl Strategy<Value = Vec<[bool; 4]>> {
        prop::collection::vec(any::<[bool; 4]>(), 1..300)
    }

    fn keys_for(frame: [bool; 4]) -> HeldKeys {
        let mut keys = HeldKeys::new();
        for (pressed, key) in frame.into_iter().zip([Key::W, Key::S, Key::ArrowUp, Key::ArrowDown]) {
            if pressed {
                keys.press(key);
            }
        }
        keys
    }

    proptest! {
        #[test]
        fn prop_paddles_stay_in_band(
            frames in key_frames(),
            start in (-500.0f32..1500.0, -500.0f32..1500.0),
            size in prop::sample::select(vec![(640.0f32, 480.0f32), (1280.0, 960.0), (800.0, 600.0)]),
            variant in prop::sample::select(Variant::ALL.to_vec()),
        ) {
            let (config, metrics, state) = setup(variant, size.0, size.1);
            let mut state = state.with_paddles(start.0, start.1);

            for frame in frames {
                step(&mut state, &config, &keys_for(frame), &metrics);
                for y in [state.paddle1_y(), state.paddle2_y()] {
                    prop_assert!(y >= metrics.paddle_min_y());
                    prop_assert!(y <= metrics.paddle_max_y());
                }
            }
        }

        #[test]
        fn prop_scores_are_monotonic(
            frames in key_frames(),
            vel in (-9.0f32..9.0, -9.0f32..9.0),
        ) {
            let (config, metrics, state) = setup(Variant::Responsive, 640.0, 480.0);
            let mut state = state.with_ball(metrics.center(), Vec2::new(vel.0, vel.1));

            for frame in frames {
                let before = (state.player1_score(), state.player2_score());
                let events = step(&mut state, &config, &keys_for(frame), &metrics);
                let after = (state.player1_score(), state.player2_score());

                prop_assert!(after.0 >= before.0 && after.1 >= before.1);
                prop_assert!((after.0 - before.0) + (after.1 - before.1) <= 1);
                prop_assert_eq!(events.scored.is_some(), after != before);
            }
        }
    }
}
