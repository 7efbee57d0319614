use crate::{Ball, Config, Paddle, PaddleIntent};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.velocity_y != 0.0 {
            paddle.y += intent.velocity_y;

            // Clamp to court bounds; the paddle stops, it never bounces
            paddle.y = config.clamp_paddle_y(paddle.y);
        }
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
