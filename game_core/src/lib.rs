pub mod components;
pub mod config;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;
pub use state::*;

use hecs::World;
use systems::*;

/// Run one deterministic tick of the Pong simulation
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    phase: &mut MatchPhase,
    events: &mut Events,
    human_x: f32,
) {
    // Nothing moves once the match is decided
    if phase.is_finished() {
        return;
    }

    // Clear events at start of tick
    events.clear();

    // 1. Apply the external coordinate to the human paddle
    apply_human_input(world, config, human_x);

    // 2. Move ball
    move_ball(world);

    // 3. Check collisions (ball vs walls, paddles)
    check_collisions(world, config, events);

    // 4. Check scoring (ball exited top or bottom)
    check_scoring(world, config, score, events);

    // 5. Check for a winner
    if let Some(winner) = check_terminal(score, config) {
        *phase = MatchPhase::Finished { winner };
        events.match_over = Some(winner);
        return;
    }

    // 6. Move the opponent paddle
    update_opponent(world, config);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, x: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, x),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
