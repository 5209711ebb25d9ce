use crate::{Ball, Motion, Pulse};
use hecs::World;

/// Start a pulse on the ball that lapses at `expires_at_ms` on the host clock
pub fn trigger_pulse(world: &mut World, expires_at_ms: f64) {
    for (_entity, (ball, pulse, motion)) in world.query_mut::<(&Ball, &mut Pulse, &mut Motion)>() {
        pulse.trigger(expires_at_ms);
        motion.speed = ball.base_speed * pulse.multiplier();
        log::trace!("pulse started, {} active", pulse.active());
    }
}

/// Remove lapsed pulses and restore the speed they were holding up
pub fn expire_pulses(world: &mut World, now_ms: f64) {
    for (_entity, (ball, pulse, motion)) in world.query_mut::<(&Ball, &mut Pulse, &mut Motion)>() {
        if pulse.expire(now_ms) > 0 {
            motion.speed = ball.base_speed * pulse.multiplier();
            log::trace!("pulse lapsed, {} still active", pulse.active());
        }
    }
}
