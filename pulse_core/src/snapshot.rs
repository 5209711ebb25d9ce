//! Read-only view of the match for renderers

use glam::Vec2;
use hecs::World;
use serde::{Deserialize, Serialize};

use crate::{Ball, Body, Config, Paddle, Player, PlayerKind, Pulse, Side};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub offset: Vec2,
    pub size: Vec2,
    pub trail: Vec<Vec2>, // most recent first
    pub pulsed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaddleView {
    pub side: Side,
    pub offset: Vec2,
    pub size: Vec2,
    pub hit: bool,
    pub pulsed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub side: Side,
    pub name: String,
    pub kind: PlayerKind,
    pub score: u32,
}

/// Everything an external renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub field_size: Vec2,
    pub ball: Option<BallView>,
    pub paddles: Vec<PaddleView>, // ordered left, right
    pub players: Vec<PlayerView>,
    pub scores: [u32; 2], // indexed by Side::index
}

impl Snapshot {
    pub fn capture(world: &World, config: &Config) -> Self {
        let ball = world
            .query::<(&Body, &Ball, &Pulse)>()
            .iter()
            .next()
            .map(|(_e, (body, ball, pulse))| BallView {
                offset: body.offset(),
                size: body.size(),
                trail: ball.trail().collect(),
                pulsed: pulse.active() > 0,
            });

        let mut paddles = Vec::with_capacity(2);
        let mut players = Vec::with_capacity(2);
        let mut scores = [0; 2];

        for (_e, (body, paddle, player)) in world.query::<(&Body, &Paddle, &Player)>().iter() {
            paddles.push(PaddleView {
                side: paddle.side,
                offset: body.offset(),
                size: body.size(),
                hit: paddle.hit,
                pulsed: paddle.pulsed,
            });
            players.push(PlayerView {
                side: paddle.side,
                name: player.name.clone(),
                kind: player.kind,
                score: player.score,
            });
            scores[paddle.side.index()] = player.score;
        }
        paddles.sort_by_key(|p| p.side.index());
        players.sort_by_key(|p| p.side.index());

        Self {
            field_size: config.field_size,
            ball,
            paddles,
            players,
            scores,
        }
    }

    pub fn paddle(&self, side: Side) -> Option<&PaddleView> {
        self.paddles.iter().find(|p| p.side == side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};

    #[test]
    fn test_snapshot_orders_paddles_and_scores() {
        let mut world = World::new();
        let config = Config::new();
        // Spawn right first to check ordering
        let right = create_paddle(
            &mut world,
            &config,
            Side::Right,
            Player::new(1, "Computer", PlayerKind::Computer),
        );
        create_paddle(
            &mut world,
            &config,
            Side::Left,
            Player::new(0, "Human", PlayerKind::Human),
        );
        create_ball(&mut world, &config, config.field_center(), Vec2::NEG_X);
        world.get::<&mut Player>(right).unwrap().score = 3;

        let snapshot = Snapshot::capture(&world, &config);

        assert_eq!(snapshot.paddles[0].side, Side::Left);
        assert_eq!(snapshot.paddles[1].side, Side::Right);
        assert_eq!(snapshot.scores, [0, 3]);
        assert_eq!(snapshot.players[1].name, "Computer");
        assert_eq!(snapshot.field_size, Vec2::new(800.0, 600.0));

        let ball = snapshot.ball.as_ref().expect("ball should be captured");
        assert_eq!(ball.offset, config.field_center());
        assert!(ball.trail.is_empty());
        assert!(!ball.pulsed);
        assert_eq!(
            snapshot.paddle(Side::Right).map(|p| p.offset.x),
            Some(config.paddle_x(Side::Right))
        );
    }
}
