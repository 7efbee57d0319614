//! Renderer bridge for the Pong core
//!
//! Commands come in from the presentation layer, frames go back out. Both
//! use postcard for compact binary serialization so they can cross a wasm or
//! process boundary.

use postcard::{from_bytes, to_allocvec};
use pong_core::{Difficulty, Match, MatchState, Mode, ParseError, Snapshot};

// ============================================================================
// Inbound commands (presentation -> core)
// ============================================================================

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Command {
    /// Leave the menu and start playing
    /// mode: "single" or "two"; difficulty: "easy" | "medium" | "hard"
    Start {
        mode: String,
        difficulty: Option<String>,
    },

    /// Raw key name, forwarded verbatim
    KeyDown { key: String },

    KeyUp { key: String },

    Restart,

    ReturnToMenu,

    /// Elapsed wall time since the previous advance, in seconds
    Advance { dt: f32 },
}

// ============================================================================
// Outbound frames (core -> presentation)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    Idle,
    Running,
    GameOver,
}

impl From<MatchState> for Phase {
    fn from(state: MatchState) -> Self {
        match state {
            MatchState::Idle => Phase::Idle,
            MatchState::Running => Phase::Running,
            MatchState::GameOver => Phase::GameOver,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Frame {
    /// Court snapshot (positions are top-left for paddles, center for ball)
    State {
        tick: u32,
        phase: Phase,
        ball_x: f32,
        ball_y: f32,
        ball_radius: f32,
        paddle_left_y: f32,
        paddle_right_y: f32,
        paddle_width: f32,
        paddle_height: f32,
        score_left: u8,
        score_right: u8,
    },

    /// Sent once when a match ends
    GameOver {
        winner: String,       // "Player 1", "Player 2" or "Computer"
        announcement: String, // e.g. "Computer Wins!"
    },
}

impl From<&Snapshot> for Frame {
    fn from(snap: &Snapshot) -> Self {
        Frame::State {
            tick: snap.tick,
            phase: snap.state.into(),
            ball_x: snap.ball.pos.x,
            ball_y: snap.ball.pos.y,
            ball_radius: snap.ball.radius,
            paddle_left_y: snap.left.y,
            paddle_right_y: snap.right.y,
            paddle_width: snap.left.width,
            paddle_height: snap.left.height,
            score_left: snap.score.left,
            score_right: snap.score.right,
        }
    }
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl Command {
    /// Serialize command to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize command from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl Frame {
    /// Serialize frame to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize frame from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Applies commands to a match and reports what the renderer should draw
#[derive(Debug, Clone, Default)]
pub struct Bridge {
    last_state: MatchState,
}

impl Bridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one command, then collect the frames it produced
    ///
    /// Only a malformed `Start` is an error; commands that make no sense in
    /// the current state are ignored by the match.
    pub fn handle(&mut self, game: &mut Match, command: Command) -> Result<Vec<Frame>, ParseError> {
        match command {
            Command::Start { mode, difficulty } => {
                let mode: Mode = mode.parse()?;
                let difficulty = match difficulty {
                    Some(difficulty) => difficulty.parse()?,
                    None => Difficulty::default(),
                };
                game.start(mode, difficulty);
            }
            Command::KeyDown { key } => {
                game.key_down(&key);
            }
            Command::KeyUp { key } => {
                game.key_up(&key);
            }
            Command::Restart => {
                game.restart();
            }
            Command::ReturnToMenu => game.return_to_menu(),
            Command::Advance { dt } => {
                game.advance(dt);
            }
        }
        Ok(self.frames(game))
    }

    /// Current court, plus a game-over frame on the transition into GameOver
    pub fn frames(&mut self, game: &Match) -> Vec<Frame> {
        let snap = game.snapshot();
        let mut frames = vec![Frame::from(&snap)];

        if snap.state == MatchState::GameOver && self.last_state != MatchState::GameOver {
            if let Some(winner) = snap.winner {
                frames.push(Frame::GameOver {
                    winner: winner.label().to_string(),
                    announcement: winner.announcement(),
                });
            }
        }
        self.last_state = snap.state;
        frames
    }
}
