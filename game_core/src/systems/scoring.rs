use crate::{Ball, Config, Events, Score, Side};
use hecs::World;

/// Check if ball left the arena through the top or bottom edge
pub fn check_scoring(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.y >= config.arena_height {
            // Past the human paddle
            Side::Opponent
        } else if ball.pos.y <= 0.0 {
            // Past the opponent paddle
            Side::Human
        } else {
            continue;
        };

        score.increment(scorer);
        events.scored = Some(scorer);

        // Serve from the center, keeping the current speed
        ball.reset_position(config);
    }
}
