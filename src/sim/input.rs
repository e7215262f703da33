//! Keyboard level state
//!
//! The simulation only asks "is this key held right now". Hosts translate
//! their own key events into a [`HeldKeys`] set and hand it over each frame.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Keys the game can bind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    S,
    ArrowUp,
    ArrowDown,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code` value
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" => Some(Key::W),
            "KeyS" => Some(Key::S),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            _ => None,
        }
    }
}

/// Read-only query of which keys are currently held
pub trait KeyState {
    fn is_pressed(&self, key: Key) -> bool;
}

/// Keys currently held down, maintained from press/release events
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    held: HashSet<Key>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Forget everything (focus loss swallows the release events)
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

impl KeyState for HeldKeys {
    fn is_pressed(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

/// No keys held
pub struct NoKeys;

impl KeyState for NoKeys {
    fn is_pressed(&self, _key: Key) -> bool {
        false
    }
}
