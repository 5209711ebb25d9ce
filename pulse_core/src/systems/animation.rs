use crate::{Config, Paddle, Time};
use hecs::World;

/// Advance every paddle's hit flash by the step's dt
pub fn advance_hit_flash(world: &mut World, time: &Time, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.advance_flash(time.dt, config.hit_flash_duration);
    }
}
