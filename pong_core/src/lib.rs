pub mod components;
pub mod config;
pub mod error;
pub mod fsm;
pub mod game;
pub mod params;
pub mod resources;
pub mod scheduler;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use fsm::*;
pub use game::*;
pub use params::*;
pub use resources::*;
pub use scheduler::*;

use hecs::World;
use systems::*;

/// Run one fixed tick of the Pong simulation
///
/// Pass `ai` to let the computer steer the right paddle. Returns the side
/// that scored this tick, if any.
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    ai: Option<Difficulty>,
) -> Option<Side> {
    // Clear events at start of tick
    events.clear();

    // 1. Move paddles based on intents
    move_paddles(world, config);

    // 2. Move ball
    move_ball(world);

    // 3. Check collisions (walls, then paddles)
    check_collisions(world, config, events);

    // 4. Check scoring (ball crossed a goal line)
    let scorer = check_scoring(world, config, score, events, rng);

    // 5. Computer picks its intent for the next tick
    if let Some(difficulty) = ai {
        apply_ai(world, difficulty);
    }

    scorer
}

/// Helper to create a paddle entity at its spawn position
pub fn create_paddle(world: &mut World, config: &Config, side: Side) -> hecs::Entity {
    let paddle = Paddle::new(
        side,
        config.paddle_x(side),
        config.paddle_spawn_y(),
        config.paddle_width,
        config.paddle_height,
    );
    world.spawn((paddle, PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2, radius: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, radius),))
}
