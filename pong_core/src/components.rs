use glam::Vec2;
use rand::Rng;

use crate::resources::GameRng;

/// Which end of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,  // Player 1
    Right, // Player 2 (or the computer)
}

/// Paddle component - represents a player's paddle
///
/// `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            side,
            x,
            y,
            width,
            height,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// True when `y` lies strictly between the paddle's top and bottom edges
    pub fn spans_y(&self, y: f32) -> bool {
        self.y < y && y < self.y + self.height
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Serve from `center` at `speed` per axis, picking each axis sign at random
    pub fn reset(&mut self, center: Vec2, speed: f32, rng: &mut GameRng) {
        self.pos = center;
        self.vel = serve_velocity(speed, rng);
    }
}

pub fn serve_velocity(speed: f32, rng: &mut GameRng) -> Vec2 {
    let sx = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
    let sy = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
    Vec2::new(speed * sx, speed * sy)
}

/// Movement intent for paddle, in units per tick (negative = up)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaddleIntent {
    pub velocity_y: f32,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_keeps_axis_speed() {
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::new(3.0, 4.0), Vec2::new(-2.0, 9.0), 10.0);
        for _ in 0..32 {
            ball.reset(Vec2::new(400.0, 300.0), 5.0, &mut rng);
            assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
            assert_eq!(ball.vel.x.abs(), 5.0);
            assert_eq!(ball.vel.y.abs(), 5.0);
        }
    }

    #[test]
    fn test_serve_uses_all_directions() {
        let mut rng = GameRng::new(99);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let v = serve_velocity(5.0, &mut rng);
            seen.insert((v.x > 0.0, v.y > 0.0));
        }
        assert_eq!(seen.len(), 4, "Every diagonal should come up");
    }

    #[test]
    fn test_paddle_spans_y_is_strict() {
        let paddle = Paddle::new(Side::Left, 0.0, 250.0, 10.0, 100.0);
        assert!(!paddle.spans_y(250.0));
        assert!(paddle.spans_y(250.5));
        assert!(paddle.spans_y(349.9));
        assert!(!paddle.spans_y(350.0));
        assert_eq!(paddle.center_y(), 300.0);
    }
}
