//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One call to `step` per frame, no wall-clock time
//! - No rendering or platform dependencies
//! - `GameState` is only mutated from inside this module

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{Side, ball_exit, bounce_off_borders, bounce_off_paddle, paddle_hit};
pub use input::{HeldKeys, Key, KeyState, NoKeys};
pub use state::{GameState, Metrics, Player};
pub use tick::{StepEvents, step};
