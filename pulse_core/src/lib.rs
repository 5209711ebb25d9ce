pub mod components;
pub mod config;
pub mod game;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod session;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;
pub use session::*;
pub use snapshot::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one frame of the simulation
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    events: &mut Events,
    inputs: &mut InputQueue,
    rng: &mut GameRng,
) {
    // Commands and pulse deadlines follow the host clock, once per frame
    ingest_inputs(world, inputs, time, config, events);
    expire_pulses(world, time.now_ms);

    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(Params::MAX_DT);

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now_ms: time.now_ms,
            elapsed: time.elapsed + (clamped_dt - remaining_dt),
        };

        // 1. Computer paddles pick a direction
        drive_computer(world, &step_time, config, rng);

        // 2. Move paddles
        move_paddles(world, &step_time, config);

        // 3. Move ball (walls, trail)
        move_ball(world, &step_time, config, events);

        // 4. Ball vs paddles, miss tracking
        let conceded = resolve_contacts(world, config, events);

        // 5. Score and start the next rally
        award_points(world, &conceded, config, events);

        // 6. Hit flash timers
        advance_hit_flash(world, &step_time, config);
    }

    // Update time
    time.elapsed += clamped_dt;
}

/// Helper to create a paddle entity owned by `player`
pub fn create_paddle(world: &mut World, config: &Config, side: Side, player: Player) -> hecs::Entity {
    let body = Body::new(
        Vec2::new(config.paddle_x(side), config.field_center().y),
        config.paddle_size,
    );
    let motion = Motion::new(Vec2::ZERO, config.paddle_speed);

    if player.kind == PlayerKind::Computer {
        world.spawn((body, motion, Paddle::new(side), player, ComputerAi::new()))
    } else {
        world.spawn((body, motion, Paddle::new(side), player))
    }
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, config: &Config, offset: Vec2, direction: Vec2) -> hecs::Entity {
    world.spawn((
        Body::new(offset, config.ball_size),
        Motion::new(direction, config.ball_speed),
        Ball::new(config.ball_speed, config.ball_trail_length),
        Pulse::new(),
    ))
}
