use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
///
/// Reflection only flips the sign of one velocity axis. There is no position
/// correction, so the ball may overlap a wall by up to one tick of travel.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top/bottom wall bounce
        if ball.pos.y + ball.radius > config.court_height || ball.pos.y - ball.radius < 0.0 {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
            log::trace!("ball hit wall at y={}", ball.pos.y);
        }

        // At most one horizontal reflection per tick, even if both paddles match
        let current = *ball;
        if paddles.iter().any(|paddle| hits_paddle(&current, paddle)) {
            ball.vel.x = -ball.vel.x;
            events.ball_hit_paddle = true;
            log::trace!("ball hit paddle at ({}, {})", ball.pos.x, ball.pos.y);
        }
    }
}

/// Leading edge inside the paddle's x-span and ball center strictly inside its y-span
///
/// Only the ball center is tested against the y-span, so a ball can clip a
/// paddle corner without reflecting.
fn hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let x_overlap = match paddle.side {
        Side::Left => ball.pos.x - ball.radius < paddle.x + paddle.width,
        Side::Right => ball.pos.x + ball.radius > paddle.x,
    };
    x_overlap && paddle.spans_y(ball.pos.y)
}
