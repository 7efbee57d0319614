//! Keyboard input handling
//!
//! Key presses and releases only ever change paddle intents; positions are
//! left to the next tick.

use std::str::FromStr;

use crate::error::ParseError;
use crate::{Mode, PaddleIntent, Paddle, Side};
use hecs::World;

/// The four keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    ArrowUp,
    ArrowDown,
}

impl Key {
    /// Paddle this key drives and whether it pushes up
    pub fn binding(self) -> (Side, bool) {
        match self {
            Key::W => (Side::Left, true),
            Key::S => (Side::Left, false),
            Key::ArrowUp => (Side::Right, true),
            Key::ArrowDown => (Side::Right, false),
        }
    }
}

impl FromStr for Key {
    type Err = ParseError;

    /// Parse a DOM-style key name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "w" => Ok(Key::W),
            "s" => Ok(Key::S),
            "ArrowUp" => Ok(Key::ArrowUp),
            "ArrowDown" => Ok(Key::ArrowDown),
            _ => Err(ParseError::UnknownKey(s.to_string())),
        }
    }
}

/// New intent for one paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntentChange {
    pub side: Side,
    pub velocity_y: f32,
}

/// Translates key events into paddle intents
#[derive(Debug, Clone, Copy)]
pub struct InputMapper {
    pub player_speed: f32,
    pub mode: Mode,
}

impl InputMapper {
    pub fn new(player_speed: f32, mode: Mode) -> Self {
        Self { player_speed, mode }
    }

    /// Whether a human drives this side's paddle
    pub fn is_human(&self, side: Side) -> bool {
        side == Side::Left || self.mode == Mode::TwoPlayer
    }

    /// Handle key down event: the last key pressed wins
    pub fn key_down(&self, key: Key) -> Option<IntentChange> {
        let (side, up) = key.binding();
        if !self.is_human(side) {
            return None;
        }
        let velocity_y = if up {
            -self.player_speed
        } else {
            self.player_speed
        };
        Some(IntentChange { side, velocity_y })
    }

    /// Handle key up event: releasing either of a paddle's keys stops it
    pub fn key_up(&self, key: Key) -> Option<IntentChange> {
        let (side, _) = key.binding();
        if !self.is_human(side) {
            return None;
        }
        Some(IntentChange {
            side,
            velocity_y: 0.0,
        })
    }
}

/// Write an intent change into the matching paddle
pub fn apply_intent(world: &mut World, change: IntentChange) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == change.side {
            intent.velocity_y = change.velocity_y;
        }
    }
}
