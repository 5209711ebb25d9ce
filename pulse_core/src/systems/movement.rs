use crate::{Ball, Body, Config, Events, Motion, Player, PlayerKind, Time};
use hecs::World;

/// Integrate paddle motion and snap paddles back inside the wall insets
pub fn move_paddles(world: &mut World, time: &Time, config: &Config) {
    for (_entity, (body, motion, player)) in world.query_mut::<(&mut Body, &mut Motion, &Player)>()
    {
        // Remote paddles are placed by the host
        if player.kind == PlayerKind::Opponent {
            continue;
        }

        motion.integrate(body, time.dt);

        let clamped = config.clamp_paddle_y(body.offset().y);
        if clamped != body.offset().y {
            body.set_y(clamped);
        }
    }
}

/// Move ball, record its trail and bounce it off the top/bottom insets
pub fn move_ball(world: &mut World, time: &Time, config: &Config, events: &mut Events) {
    for (_entity, (body, motion, ball)) in world.query_mut::<(&mut Body, &mut Motion, &mut Ball)>()
    {
        motion.integrate(body, time.dt);
        ball.record(body.offset());

        let bounds = body.boundaries();
        let half_height = body.size().y / 2.0;
        let inset = config.ball_wall_inset;
        let floor = config.field_size.y - inset;

        if bounds.top <= inset {
            body.set_y(inset + half_height);
            if motion.direction.y < 0.0 {
                events.wall_bounces += 1;
            }
            motion.direction.y = motion.direction.y.abs();
        } else if bounds.bottom >= floor {
            body.set_y(floor - half_height);
            if motion.direction.y > 0.0 {
                events.wall_bounces += 1;
            }
            motion.direction.y = -motion.direction.y.abs();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Paddle, Player, Side};
    use glam::Vec2;

    fn ball_state(world: &World) -> (Body, Motion) {
        world
            .query::<(&Body, &Motion, &Ball)>()
            .iter()
            .next()
            .map(|(_e, (body, motion, _))| (*body, *motion))
            .unwrap()
    }

    #[test]
    fn test_ball_moves_by_speed_times_dt() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        create_ball(&mut world, &config, config.field_center(), Vec2::X);

        move_ball(&mut world, &Time::new(0.5, 0.0), &config, &mut events);

        let (body, _) = ball_state(&world);
        assert_eq!(body.offset(), Vec2::new(400.0 + 128.0, 300.0));
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        let direction = Vec2::new(1.0, -1.0).normalize();
        create_ball(&mut world, &config, Vec2::new(400.0, 20.0), direction);

        move_ball(&mut world, &Time::new(0.1, 0.0), &config, &mut events);

        let (body, motion) = ball_state(&world);
        assert!(motion.direction.y > 0.0, "Ball should bounce down after hitting top wall");
        assert_eq!(motion.direction.x, direction.x, "X direction should be unchanged");
        assert_eq!(body.boundaries().top, config.ball_wall_inset, "Ball snapped inside inset");
        assert_eq!(events.wall_bounces, 1);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        let direction = Vec2::new(-1.0, 1.0).normalize();
        create_ball(&mut world, &config, Vec2::new(400.0, 585.0), direction);

        move_ball(&mut world, &Time::new(0.1, 0.0), &config, &mut events);

        let (body, motion) = ball_state(&world);
        assert!(motion.direction.y < 0.0, "Ball should bounce up after hitting bottom wall");
        assert_eq!(
            body.boundaries().bottom,
            config.field_size.y - config.ball_wall_inset
        );

        // The following frame stays inside the inset
        move_ball(&mut world, &Time::new(0.016, 0.0), &config, &mut events);
        let (body, _) = ball_state(&world);
        assert!(body.boundaries().bottom <= config.field_size.y - config.ball_wall_inset);
        assert_eq!(events.wall_bounces, 1, "Resting flush must not bounce again");
    }

    #[test]
    fn test_wall_snap_is_idempotent_without_time() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        create_ball(&mut world, &config, Vec2::new(400.0, 10.0), Vec2::new(0.6, -0.8));

        for _ in 0..3 {
            move_ball(&mut world, &Time::new(0.0, 0.0), &config, &mut events);
        }

        let (body, motion) = ball_state(&world);
        assert!(motion.direction.y > 0.0, "Repeated zero-length frames keep the bounce");
        assert_eq!(body.offset().y, config.ball_wall_inset + config.ball_size.y / 2.0);
        assert_eq!(events.wall_bounces, 1);
    }

    #[test]
    fn test_trail_never_exceeds_max_length() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        create_ball(&mut world, &config, config.field_center(), Vec2::X);

        for _ in 0..20 {
            move_ball(&mut world, &Time::new(0.01, 0.0), &config, &mut events);
        }

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.trail_len(), config.ball_trail_length);
        }
    }

    #[test]
    fn test_paddle_clamped_to_inset() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_paddle(
            &mut world,
            &config,
            Side::Left,
            Player::new(0, "Human", PlayerKind::Human),
        );
        world.get::<&mut Motion>(entity).unwrap().direction = Vec2::new(0.0, -1.0);

        move_paddles(&mut world, &Time::new(1.0, 0.0), &config);

        let body = *world.get::<&Body>(entity).unwrap();
        assert_eq!(body.boundaries().top, config.paddle_wall_inset);
        let motion = *world.get::<&Motion>(entity).unwrap();
        assert_eq!(
            motion.direction,
            Vec2::new(0.0, -1.0),
            "Clamping snaps the paddle without cancelling its direction"
        );
    }

    #[test]
    fn test_opponent_paddle_is_not_integrated() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_paddle(
            &mut world,
            &config,
            Side::Right,
            Player::new(1, "Remote", PlayerKind::Opponent),
        );
        world.get::<&mut Motion>(entity).unwrap().direction = Vec2::new(0.0, 1.0);

        move_paddles(&mut world, &Time::new(0.1, 0.0), &config);

        let body = *world.get::<&Body>(entity).unwrap();
        assert_eq!(body.offset().y, config.field_center().y);
        assert!(world.get::<&Paddle>(entity).is_ok());
    }
}
