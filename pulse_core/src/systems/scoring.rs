use glam::Vec2;
use hecs::World;

use crate::{
    Ball, Body, Config, ContactState, Events, Motion, Paddle, Player, PointEvent, Pulse, Side,
};

/// Credit each conceded point to the other player and start a new rally
pub fn award_points(world: &mut World, conceded: &[Side], config: &Config, events: &mut Events) {
    for &side in conceded {
        let event = PointEvent::conceded_by(side);

        for (_entity, (paddle, player)) in world.query_mut::<(&Paddle, &mut Player)>() {
            if paddle.side == event.scoring {
                player.award_point();
                log::debug!("{} scores, now {}", player.name, player.score);
            }
        }

        events.points.push(event);
        start_rally(world, config, side);
    }
}

/// Recenter ball and paddles; the ball serves toward `serve_toward`
pub fn start_rally(world: &mut World, config: &Config, serve_toward: Side) {
    let center = config.field_center();

    for (_entity, (body, motion, ball, pulse)) in
        world.query_mut::<(&mut Body, &mut Motion, &mut Ball, &mut Pulse)>()
    {
        body.set_offset(center);
        motion.direction = Vec2::new(-serve_toward.outward(), 0.0);
        pulse.clear();
        motion.speed = ball.base_speed;
        ball.clear_trail();
    }

    for (_entity, (body, paddle)) in world.query_mut::<(&mut Body, &mut Paddle)>() {
        body.set_y(center.y);
        paddle.contact = ContactState::Tracking;
    }

    log::debug!("new rally, serving toward {serve_toward:?}");
}
