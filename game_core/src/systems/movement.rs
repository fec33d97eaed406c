use crate::Ball;
use hecs::World;

/// Move ball by one tick of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    #[test]
    fn test_ball_integrates_velocity() {
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(300.0, 200.0), Vec2::new(-10.0, 10.2));

        move_ball(&mut world);
        move_ball(&mut world);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos.x, 280.0);
            assert!((ball.pos.y - 220.4).abs() < 1e-4);
        }
    }
}
