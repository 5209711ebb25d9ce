use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::{Ball, Body, ComputerAi, Config, GameRng, Motion, Paddle, Side, Time};

/// Steer computer-controlled paddles toward the ball.
///
/// The opponent only reacts once the ball is heading its way and has crossed
/// `reaction_latency` of the field, tracks the ball's current height plus a
/// slowly re-rolled noise offset, and re-decides at most once per
/// `reaction_delay`. It never predicts the ball's path.
pub fn drive_computer(world: &mut World, time: &Time, config: &Config, rng: &mut GameRng) {
    let ball = world
        .query_mut::<(&Body, &Motion, &Ball)>()
        .into_iter()
        .next()
        .map(|(_e, (body, motion, _))| (body.offset(), motion.direction));

    let Some((ball_offset, ball_direction)) = ball else {
        return;
    };

    for (_entity, (body, motion, paddle, ai)) in
        world.query_mut::<(&Body, &mut Motion, &Paddle, &mut ComputerAi)>()
    {
        steer(
            ai,
            motion,
            paddle.side,
            body.offset().y,
            ball_offset,
            ball_direction,
            config.field_size.x,
            time.dt,
            rng,
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn steer(
    ai: &mut ComputerAi,
    motion: &mut Motion,
    side: Side,
    paddle_y: f32,
    ball_offset: Vec2,
    ball_direction: Vec2,
    field_width: f32,
    dt: f32,
    rng: &mut GameRng,
) {
    let toward = -side.outward();
    let approaching = ball_direction.x * toward > 0.0;
    let in_reach = match side {
        Side::Right => ball_offset.x > field_width * ai.reaction_latency,
        Side::Left => ball_offset.x < field_width * (1.0 - ai.reaction_latency),
    };

    if approaching && in_reach {
        resample_offset(ai, dt, rng);

        let target_y = ball_offset.y + ai.target_offset;
        if ai.reaction_timer == 0.0 {
            if target_y < paddle_y - ai.tolerance {
                motion.direction = Vec2::new(0.0, -1.0);
            } else if target_y > paddle_y + ai.tolerance {
                motion.direction = Vec2::new(0.0, 1.0);
            }
            // within tolerance: hold the current direction
        }

        ai.reaction_timer += dt;
        if ai.reaction_timer > ai.reaction_delay {
            ai.reaction_timer = 0.0;
        }
    } else {
        ai.reaction_timer = 0.0;
    }

    if ball_direction.x * toward < 0.0 {
        motion.direction = Vec2::ZERO;
    }
}

fn resample_offset(ai: &mut ComputerAi, dt: f32, rng: &mut GameRng) {
    ai.last_offset_change_time += dt;

    if ai.last_offset_change_time > ai.offset_change_frequency {
        ai.target_offset = rng.0.gen_range(-ai.max_offset..=ai.max_offset);
        ai.last_offset_change_time = 0.0;
    }
}
