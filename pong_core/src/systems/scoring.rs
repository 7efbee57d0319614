use crate::{Ball, Config, Events, GameRng, Score, Side};
use hecs::World;

/// Check if ball left the court (scoring)
///
/// Runs after collision resolution. Returns the side that scored, if any.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    let center = config.court_center();
    let mut scorer = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Check if ball's leading edge crossed the left or right goal line
        let side = if ball.pos.x - ball.radius < 0.0 {
            Side::Right
        } else if ball.pos.x + ball.radius > config.court_width {
            Side::Left
        } else {
            continue;
        };

        score.increment(side);
        match side {
            Side::Left => events.left_scored = true,
            Side::Right => events.right_scored = true,
        }
        log::debug!(
            "{:?} scored, score is now {}-{}",
            side,
            score.left,
            score.right
        );

        // Serve again from the center; the old velocity is discarded
        ball.reset(center, config.ball_speed_initial, rng);
        scorer = Some(side);
    }

    scorer
}
