use crate::{Aabb, Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with the side walls and both paddles.
///
/// Paddle checks only look at whether the ball is inside the paddle's y-band,
/// not at its direction, so a ball lingering in the band picks up the speed
/// increment on every tick it stays there.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle bounds without holding borrows
    let paddles: Vec<(Side, Aabb)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.bounds(config)))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Side walls: pure reflection
        if ball.pos.x <= 0.0 || ball.pos.x >= config.arena_width - config.ball_size {
            ball.vel.x = -ball.vel.x;
            events.ball_hit_wall = true;
        }

        let ball_bounds = ball.bounds(config);

        for side in [Side::Opponent, Side::Human] {
            let Some((_, paddle_bounds)) = paddles.iter().find(|(s, _)| *s == side) else {
                continue;
            };
            if !ball_bounds.overlaps_x(paddle_bounds) {
                continue;
            }

            match side {
                Side::Opponent if ball.pos.y <= config.paddle_height => {
                    // Bounce downward, slightly faster
                    ball.vel.y = ball.vel.y.abs() + config.ball_speed_increment;
                    events.ball_hit_paddle = Some(side);
                }
                Side::Human
                    if ball.pos.y >= config.arena_height - config.paddle_height
                        && ball.pos.y <= config.arena_height =>
                {
                    // Bounce upward, slightly faster
                    ball.vel.y = -ball.vel.y.abs() - config.ball_speed_increment;
                    events.ball_hit_paddle = Some(side);
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Events) {
        (World::new(), Config::new(), Events::new())
    }

    fn ball(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .unwrap()
    }

    #[test]
    fn test_ball_bounces_off_left_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(0.0, 200.0), Vec2::new(-10.0, 10.0));

        check_collisions(&mut world, &config, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.vel.x, 10.0, "Ball should bounce right");
        assert_eq!(ball.vel.y, 10.0, "Y velocity should be unchanged");
        assert_eq!(ball.pos.x, 0.0, "Position is not corrected");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_right_wall() {
        let (mut world, config, mut events) = setup_world();
        let edge = config.arena_width - config.ball_size;
        create_ball(&mut world, Vec2::new(edge, 200.0), Vec2::new(10.0, -10.0));

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball(&world).vel.x, -10.0, "Ball should bounce left");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_no_wall_bounce_inside_arena() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(0.5, 200.0), Vec2::new(-10.0, 10.0));

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball(&world).vel.x, -10.0);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_collides_with_opponent_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Opponent, 250.0);
        create_ball(&mut world, Vec2::new(300.0, 10.0), Vec2::new(10.0, -10.0));

        check_collisions(&mut world, &config, &mut events);

        let ball = ball(&world);
        assert!((ball.vel.y - 10.2).abs() < 1e-5, "Bounce down, faster");
        assert_eq!(ball.vel.x, 10.0);
        assert_eq!(events.ball_hit_paddle, Some(Side::Opponent));
    }

    #[test]
    fn test_ball_collides_with_human_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Human, 250.0);
        create_ball(&mut world, Vec2::new(300.0, 390.0), Vec2::new(10.0, 10.0));

        check_collisions(&mut world, &config, &mut events);

        assert!((ball(&world).vel.y + 10.2).abs() < 1e-5, "Bounce up, faster");
        assert_eq!(events.ball_hit_paddle, Some(Side::Human));
    }

    #[test]
    fn test_ball_edge_overlap_counts_as_hit() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Human, 250.0);
        // Ball's right edge touches the paddle's left edge
        create_ball(&mut world, Vec2::new(240.0, 395.0), Vec2::new(10.0, 10.0));

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(events.ball_hit_paddle, Some(Side::Human));
    }

    #[test]
    fn test_ball_misses_paddle_outside_x_range() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Human, 250.0);
        create_ball(&mut world, Vec2::new(100.0, 395.0), Vec2::new(10.0, 10.0));

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball(&world).vel.y, 10.0);
        assert_eq!(events.ball_hit_paddle, None);
    }

    #[test]
    fn test_ball_outside_band_is_not_a_hit() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Opponent, 250.0);
        create_paddle(&mut world, Side::Human, 250.0);
        create_ball(&mut world, Vec2::new(300.0, 200.0), Vec2::new(10.0, 10.0));

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball(&world).vel, Vec2::new(10.0, 10.0));
        assert_eq!(events.ball_hit_paddle, None);
    }

    #[test]
    fn test_lingering_in_band_accumulates_speed() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Opponent, 250.0);
        create_ball(&mut world, Vec2::new(300.0, 5.0), Vec2::new(0.0, -10.0));

        check_collisions(&mut world, &config, &mut events);
        check_collisions(&mut world, &config, &mut events);
        check_collisions(&mut world, &config, &mut events);

        let expected = 10.0 + 3.0 * config.ball_speed_increment;
        assert!((ball(&world).vel.y - expected).abs() < 1e-4);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Human, 250.0);

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(events, Events::default());
    }
}
