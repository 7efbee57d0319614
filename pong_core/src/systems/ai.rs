use crate::{Ball, Difficulty, Paddle, PaddleIntent, Side};
use hecs::World;

/// Velocity the computer wants for its paddle this tick
///
/// Strategy: chase the ball's y, but hold still while the ball is within a
/// dead zone of `ball.radius * reaction_factor` around the paddle center.
/// No prediction and no memory between ticks.
pub fn compute_ai_intent(ball: &Ball, ai_paddle: &Paddle, difficulty: Difficulty) -> f32 {
    let profile = difficulty.profile();
    let paddle_center = ai_paddle.center_y();
    let dead_zone = ball.radius * profile.reaction_factor;

    if ball.pos.y < paddle_center - dead_zone {
        -profile.ai_speed
    } else if ball.pos.y > paddle_center + dead_zone {
        profile.ai_speed
    } else {
        0.0
    }
}

/// Drive the right paddle's intent from the ball position
pub fn apply_ai(world: &mut World, difficulty: Difficulty) {
    let ball = match world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball) {
        Some(ball) => ball,
        None => return,
    };

    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == Side::Right {
            intent.velocity_y = compute_ai_intent(&ball, paddle, difficulty);
        }
    }
}
