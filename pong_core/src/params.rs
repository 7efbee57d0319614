/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PLAYER_SPEED: f32 = 7.0; // units per tick

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_INITIAL: f32 = 5.0; // per axis, units per tick

    // Score
    pub const WIN_SCORE: u8 = 11; // First to 11 wins, no win-by-two

    // AI (speed in units per tick, reaction scales the dead zone)
    pub const AI_SPEED_EASY: f32 = 3.0;
    pub const AI_SPEED_MEDIUM: f32 = 5.0;
    pub const AI_SPEED_HARD: f32 = 7.0;
    pub const AI_REACTION_EASY: f32 = 0.4;
    pub const AI_REACTION_MEDIUM: f32 = 0.6;
    pub const AI_REACTION_HARD: f32 = 1.0;

    // Scheduling
    pub const FIXED_DT: f32 = 1.0 / 60.0; // ~60 Hz
    pub const MAX_FRAME_DT: f32 = 0.1; // Clamp to prevent large catch-up bursts
}
