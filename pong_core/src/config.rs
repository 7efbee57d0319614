use std::fmt;
use std::str::FromStr;

use crate::components::Side;
use crate::error::ParseError;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub court_width: f32,
    pub court_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub player_speed: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_width: Params::COURT_WIDTH,
            court_height: Params::COURT_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            player_speed: Params::PLAYER_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the left edge X of a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => 0.0,
            Side::Right => self.court_width - self.paddle_width,
        }
    }

    /// Top edge Y of a paddle centred vertically in the court
    pub fn paddle_spawn_y(&self) -> f32 {
        self.court_height / 2.0 - self.paddle_height / 2.0
    }

    /// Clamp paddle Y (top edge) to court bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.court_height - self.paddle_height)
    }

    pub fn court_center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.court_width / 2.0, self.court_height / 2.0)
    }
}

/// Who is playing the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Player 2 is driven by the AI
    SinglePlayer,
    #[default]
    TwoPlayer,
}

impl Mode {
    pub fn is_single_player(self) -> bool {
        self == Mode::SinglePlayer
    }
}

impl FromStr for Mode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" | "singlePlayer" | "SinglePlayer" => Ok(Mode::SinglePlayer),
            "two" | "twoPlayer" | "TwoPlayer" => Ok(Mode::TwoPlayer),
            _ => Err(ParseError::UnknownMode(s.to_string())),
        }
    }
}

/// AI difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Paddle speed and dead-zone scale for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    pub ai_speed: f32,
    pub reaction_factor: f32,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                ai_speed: Params::AI_SPEED_EASY,
                reaction_factor: Params::AI_REACTION_EASY,
            },
            Difficulty::Medium => DifficultyProfile {
                ai_speed: Params::AI_SPEED_MEDIUM,
                reaction_factor: Params::AI_REACTION_MEDIUM,
            },
            Difficulty::Hard => DifficultyProfile {
                ai_speed: Params::AI_SPEED_HARD,
                reaction_factor: Params::AI_REACTION_HARD,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseError::UnknownDifficulty(s.to_string())),
        }
    }
}
