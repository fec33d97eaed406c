use hecs::World;

use crate::{Config, Paddle, Side};

/// Center the human paddle on the latest external coordinate.
///
/// Non-finite readings are ignored so the paddle holds its last position.
pub fn apply_human_input(world: &mut World, config: &Config, human_x: f32) {
    if !human_x.is_finite() {
        return;
    }

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Human {
            paddle.x = config.clamp_paddle_x(human_x - config.paddle_width / 2.0);
        }
    }
}
