use std::f32::consts::FRAC_PI_4;

use glam::Vec2;
use hecs::World;

use crate::{
    Ball, Body, Boundaries, Config, ContactState, Events, Motion, Paddle, Player, PlayerKind,
    Side,
};

/// Outcome of testing one paddle against the ball for a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Clear,
    /// Ball reached the paddle face within its vertical span
    Hit,
    /// Ball reached the paddle's plane outside its vertical span
    Missed,
    /// Previously missed ball has fully left the field on this side
    Conceded,
}

/// Classify the ball against a paddle given the paddle's current contact state
pub fn probe(
    ball: &Boundaries,
    paddle: &Boundaries,
    side: Side,
    state: ContactState,
    field_width: f32,
) -> Contact {
    match state {
        ContactState::Tracking => {
            let reached = match side {
                Side::Left => ball.left <= paddle.right,
                Side::Right => ball.right >= paddle.left,
            };

            if !reached {
                Contact::Clear
            } else if ball.overlaps_vertically(paddle) {
                Contact::Hit
            } else {
                Contact::Missed
            }
        }
        ContactState::Missed => {
            let exited = match side {
                Side::Left => ball.right <= 0.0,
                Side::Right => ball.left >= field_width,
            };

            if exited {
                Contact::Conceded
            } else {
                Contact::Clear
            }
        }
    }
}

/// Unit direction for a ball returned by the paddle guarding `side`.
///
/// The hit point relative to the paddle center maps linearly onto a
/// deflection of at most 45 degrees; the horizontal component always points
/// back into the field.
pub fn reflect(ball_y: f32, paddle_top: f32, paddle_height: f32, side: Side) -> Vec2 {
    let half_height = paddle_height / 2.0;
    let collision_point = ball_y - paddle_top;
    let relative = ((collision_point - half_height) / half_height).clamp(-1.0, 1.0);
    let angle = relative * FRAC_PI_4;

    let dy = angle.sin();
    let norm = (1.0 + dy * dy).sqrt();
    Vec2::new(side.outward() / norm, dy / norm)
}

/// Run the hit/miss protocol for every locally simulated paddle.
///
/// Returns the sides that conceded a point during this step.
pub fn resolve_contacts(world: &mut World, config: &Config, events: &mut Events) -> Vec<Side> {
    let mut conceded = Vec::new();

    // Collect ball data without holding borrows
    let ball_data = world
        .query_mut::<(&Body, &Motion, &Ball)>()
        .into_iter()
        .next()
        .map(|(entity, (body, motion, _))| (entity, *body, *motion));

    let (ball_entity, mut ball_body, mut ball_motion) = match ball_data {
        Some(data) => data,
        None => return conceded, // No ball in world
    };

    let mut ball_changed = false;

    for (_entity, (body, paddle, player)) in world.query_mut::<(&Body, &mut Paddle, &Player)>() {
        // Remote paddles are judged by their own host
        if player.kind == PlayerKind::Opponent {
            continue;
        }

        let paddle_bounds = body.boundaries();
        let contact = probe(
            &ball_body.boundaries(),
            &paddle_bounds,
            paddle.side,
            paddle.contact,
            config.field_size.x,
        );

        match contact {
            Contact::Clear => {}
            Contact::Hit => {
                let half_width = ball_body.size().x / 2.0;
                let flush_x = match paddle.side {
                    Side::Left => paddle_bounds.right + half_width,
                    Side::Right => paddle_bounds.left - half_width,
                };
                ball_body.set_x(flush_x);
                ball_motion.direction = reflect(
                    ball_body.offset().y,
                    paddle_bounds.top,
                    paddle_bounds.height,
                    paddle.side,
                );
                ball_changed = true;

                paddle.mark_hit();
                events.paddle_hits.push(paddle.side);
                log::trace!("{:?} paddle returned the ball", paddle.side);
            }
            Contact::Missed => {
                paddle.contact = ContactState::Missed;
            }
            Contact::Conceded => {
                paddle.contact = ContactState::Tracking;
                conceded.push(paddle.side);
            }
        }
    }

    if ball_changed {
        if let Ok((body, motion)) = world.query_one_mut::<(&mut Body, &mut Motion)>(ball_entity) {
            *body = ball_body;
            *motion = ball_motion;
        }
    }

    conceded
}
