use glam::Vec2;
use hecs::{Entity, World};

use crate::systems::award_points;
use crate::{
    create_ball, create_paddle, step, Body, Command, Config, Events, FrameClock, GameRng,
    InputQueue, Player, PlayerKind, PointEvent, Session, SessionAction, SessionState, Side,
    Snapshot, Time, Transition,
};

/// Who sits on one side of the table
#[derive(Debug, Clone)]
pub struct Seat {
    pub name: String,
    pub kind: PlayerKind,
}

impl Seat {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Human,
        }
    }

    pub fn computer() -> Self {
        Self {
            name: "Computer".to_string(),
            kind: PlayerKind::Computer,
        }
    }

    pub fn opponent(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Opponent,
        }
    }
}

type PointListener = Box<dyn FnMut(&PointEvent)>;

/// A match between the host (left) and guest (right) player
pub struct Match {
    pub world: World,
    pub time: Time,
    pub clock: FrameClock,
    pub config: Config,
    pub events: Events,
    pub inputs: InputQueue,
    pub rng: GameRng,
    pub session: Session,
    pub ball: Entity,
    pub left: Entity,
    pub right: Entity,
    listeners: Vec<PointListener>,
}

impl Match {
    pub fn new(config: Config, host: Seat, guest: Seat, seed: u64) -> Self {
        config.validate();

        let mut world = World::new();
        let left = create_paddle(
            &mut world,
            &config,
            Side::Left,
            Player::new(0, host.name, host.kind),
        );
        let right = create_paddle(
            &mut world,
            &config,
            Side::Right,
            Player::new(1, guest.name, guest.kind),
        );
        let serve = Vec2::new(-config.first_serve.outward(), 0.0);
        let ball = create_ball(&mut world, &config, config.field_center(), serve);

        Self {
            world,
            time: Time::default(),
            clock: FrameClock::new(),
            config,
            events: Events::new(),
            inputs: InputQueue::new(),
            rng: GameRng::new(seed),
            session: Session::new(),
            ball,
            left,
            right,
            listeners: Vec::new(),
        }
    }

    /// Human on the left against the computer on the right
    pub fn versus_computer(config: Config, name: impl Into<String>, seed: u64) -> Self {
        Self::new(config, Seat::human(name), Seat::computer(), seed)
    }

    pub fn start(&mut self) -> Transition {
        self.session.transition(SessionAction::Start)
    }

    pub fn pause(&mut self) -> Transition {
        self.session.transition(SessionAction::Pause)
    }

    /// Resume play; the first frame after resuming has no delta
    pub fn resume(&mut self) -> Transition {
        let result = self.session.transition(SessionAction::Resume);
        if result.success {
            self.clock.reset();
        }
        result
    }

    pub fn stop(&mut self) -> Transition {
        self.session.transition(SessionAction::Stop)
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    /// Queue a command for the paddle on `side`, applied at the next frame
    pub fn command(&mut self, side: Side, command: Command) {
        if !self.session.is_running() {
            return;
        }
        self.inputs.push(side, command);
    }

    /// Register a callback invoked synchronously for every conceded point
    pub fn on_point<F>(&mut self, listener: F)
    where
        F: FnMut(&PointEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Advance the match to the host timestamp. Returns false when not running.
    pub fn frame(&mut self, timestamp_ms: f64) -> bool {
        if !self.session.is_running() {
            return false;
        }

        self.events.clear();
        self.time.dt = self.clock.tick(timestamp_ms);
        self.time.now_ms = timestamp_ms;

        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.events,
            &mut self.inputs,
            &mut self.rng,
        );

        self.notify(0);
        true
    }

    /// Events emitted during the most recent frame
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.world, &self.config)
    }

    pub fn score(&self, side: Side) -> u32 {
        let entity = self.paddle_entity(side);
        self.world
            .get::<&Player>(entity)
            .map(|player| player.score)
            .unwrap_or(0)
    }

    /// Place a remote opponent's paddle; ignored for locally driven paddles
    pub fn place_opponent(&mut self, side: Side, y: f32) {
        if !self.session.is_running() {
            return;
        }
        let entity = self.paddle_entity(side);
        if let Ok((body, player)) = self.world.query_one_mut::<(&mut Body, &Player)>(entity) {
            if player.kind == PlayerKind::Opponent {
                body.set_y(self.config.clamp_paddle_y(y));
            }
        }
    }

    /// Record a point conceded by a remote opponent
    pub fn concede(&mut self, side: Side) {
        if !self.session.is_running() {
            return;
        }
        let is_remote = self
            .world
            .get::<&Player>(self.paddle_entity(side))
            .map(|player| player.kind == PlayerKind::Opponent)
            .unwrap_or(false);
        if !is_remote {
            log::debug!("ignoring concession for locally simulated {side:?} paddle");
            return;
        }

        // Points from the last frame stay visible in `events` but were already announced
        let first = self.events.points.len();
        award_points(&mut self.world, &[side], &self.config, &mut self.events);
        self.notify(first);
    }

    fn paddle_entity(&self, side: Side) -> Entity {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Announce the points recorded from index `first` onward
    fn notify(&mut self, first: usize) {
        if self.listeners.is_empty() {
            return;
        }
        for event in &self.events.points[first..] {
            for listener in self.listeners.iter_mut() {
                listener(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_initialization() {
        let game = Match::versus_computer(Config::new(), "Human", 1);
        let snapshot = game.snapshot();

        assert_eq!(game.state(), SessionState::Idle);
        assert_eq!(snapshot.scores, [0, 0]);
        assert_eq!(snapshot.players[0].kind, PlayerKind::Human);
        assert_eq!(snapshot.players[1].kind, PlayerKind::Computer);
        assert_eq!(snapshot.ball.map(|b| b.offset), Some(Vec2::new(400.0, 300.0)));
    }

    #[test]
    fn test_frames_ignored_until_started() {
        let mut game = Match::versus_computer(Config::new(), "Human", 1);

        assert!(!game.frame(0.0));
        assert!(!game.frame(16.0));
        game.command(Side::Left, Command::MoveUp);
        assert!(game.inputs.inputs.is_empty(), "Commands dropped while idle");

        game.start();
        assert!(game.frame(32.0));
    }

    #[test]
    fn test_first_serve_heads_left() {
        let mut game = Match::versus_computer(Config::new(), "Human", 1);
        game.start();
        game.frame(0.0);
        game.frame(100.0);

        let ball = game.snapshot().ball.unwrap();
        assert!(ball.offset.x < 400.0);
        assert_eq!(ball.offset.y, 300.0);
    }

    #[test]
    fn test_concede_only_for_opponent() {
        let mut game = Match::new(
            Config::new(),
            Seat::human("Host"),
            Seat::opponent("Guest"),
            1,
        );
        game.start();
        game.concede(Side::Left);
        assert_eq!(game.score(Side::Right), 0, "Local side is judged by the simulation");

        game.concede(Side::Right);
        assert_eq!(game.score(Side::Left), 1);
        assert_eq!(game.events().points, vec![PointEvent::conceded_by(Side::Right)]);
    }

    #[test]
    fn test_place_opponent_clamps_and_ignores_local_paddles() {
        let mut game = Match::new(
            Config::new(),
            Seat::human("Host"),
            Seat::opponent("Guest"),
            1,
        );
        game.start();

        game.place_opponent(Side::Right, 5.0);
        game.place_opponent(Side::Left, 5.0);

        let snapshot = game.snapshot();
        assert_eq!(snapshot.paddle(Side::Right).unwrap().offset.y, 80.0);
        assert_eq!(snapshot.paddle(Side::Left).unwrap().offset.y, 300.0);
    }

    #[test]
    fn test_remote_calls_ignored_unless_running() {
        let mut game = Match::new(
            Config::new(),
            Seat::human("Host"),
            Seat::opponent("Guest"),
            1,
        );

        game.concede(Side::Right);
        game.place_opponent(Side::Right, 5.0);
        assert_eq!(game.score(Side::Left), 0, "Idle match does not score");
        assert_eq!(game.snapshot().paddle(Side::Right).unwrap().offset.y, 300.0);

        game.start();
        game.stop();
        game.concede(Side::Right);
        game.place_opponent(Side::Right, 5.0);
        assert_eq!(game.score(Side::Left), 0, "Stopped match does not score");
        assert_eq!(game.snapshot().paddle(Side::Right).unwrap().offset.y, 300.0);
    }

    #[test]
    fn test_repeated_concessions_announced_once_each() {
        let mut game = Match::new(
            Config::new(),
            Seat::human("Host"),
            Seat::opponent("Guest"),
            1,
        );
        let heard = std::rc::Rc::new(std::cell::Cell::new(0));
        let counter = std::rc::Rc::clone(&heard);
        game.on_point(move |_| counter.set(counter.get() + 1));
        game.start();

        game.concede(Side::Right);
        game.concede(Side::Right);

        assert_eq!(heard.get(), 2);
        assert_eq!(game.score(Side::Left), 2);
    }
}
