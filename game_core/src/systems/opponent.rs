use crate::{Ball, Config, Paddle, Side};
use hecs::World;

/// Greedy tracking: step the opponent paddle's center toward the ball's x by
/// a fixed `opponent_speed`, then clamp to the arena. No prediction.
pub fn update_opponent(world: &mut World, config: &Config) {
    let ball_x = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => ball.pos.x,
        None => return,
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Opponent {
            continue;
        }

        let center = paddle.center_x(config);
        if center < ball_x {
            paddle.x += config.opponent_speed;
        } else if center > ball_x {
            paddle.x -= config.opponent_speed;
        }
        paddle.x = config.clamp_paddle_x(paddle.x);
    }
}
