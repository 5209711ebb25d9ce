use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::geometry::Boundaries;
use crate::params::Params;

/// Horizontal side of the field a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// X sign of a ball travelling away from this side's paddle
    pub fn outward(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Position and extent of an entity. Boundaries are recomputed on every write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    offset: Vec2,
    size: Vec2,
    boundaries: Boundaries,
}

impl Body {
    pub fn new(offset: Vec2, size: Vec2) -> Self {
        assert!(
            size.x >= 0.0 && size.y >= 0.0,
            "body size must not be negative: {size}"
        );
        Self {
            offset,
            size,
            boundaries: Boundaries::from_center_size(offset, size),
        }
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn boundaries(&self) -> Boundaries {
        self.boundaries
    }

    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
        self.boundaries.update(self.offset, self.size);
    }

    pub fn set_x(&mut self, x: f32) {
        self.set_offset(Vec2::new(x, self.offset.y));
    }

    pub fn set_y(&mut self, y: f32) {
        self.set_offset(Vec2::new(self.offset.x, y));
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.set_offset(self.offset + delta);
    }
}

/// Velocity as a unit direction plus scalar speed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub direction: Vec2, // ZERO = stopped
    pub speed: f32,
    pub current_speed: f32,
}

impl Motion {
    pub fn new(direction: Vec2, speed: f32) -> Self {
        Self {
            direction,
            speed,
            current_speed: 0.0,
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.direction == Vec2::ZERO
    }

    /// Advance `body` by `dt` seconds along the current direction.
    ///
    /// A zero direction pins `current_speed` to 0 and leaves the body in place,
    /// which keeps "no input" distinguishable from "moving at zero speed".
    pub fn integrate(&mut self, body: &mut Body, dt: f32) {
        if self.is_stopped() {
            self.current_speed = 0.0;
            return;
        }

        self.current_speed = self.speed;
        body.translate(self.direction * self.speed * dt);
    }
}

/// Ball component - base speed and the motion trail, most recent first
#[derive(Debug, Clone)]
pub struct Ball {
    pub base_speed: f32,
    trail: VecDeque<Vec2>,
    max_trail_length: usize,
}

impl Ball {
    pub fn new(base_speed: f32, max_trail_length: usize) -> Self {
        Self {
            base_speed,
            trail: VecDeque::with_capacity(max_trail_length + 1),
            max_trail_length,
        }
    }

    pub fn record(&mut self, offset: Vec2) {
        self.trail.push_front(offset);
        self.trail.truncate(self.max_trail_length);
    }

    pub fn trail(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.trail.iter().copied()
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    pub fn max_trail_length(&self) -> usize {
        self.max_trail_length
    }

    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }
}

/// Active speed boosts on the ball.
///
/// Every pulse doubles the speed and expires on its own deadline, so the
/// multiplier is always `2^active` and overlapping pulses unwind cleanly.
#[derive(Debug, Clone, Default)]
pub struct Pulse {
    deadlines: Vec<f64>, // clock ms
}

impl Pulse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&mut self, expires_at_ms: f64) {
        self.deadlines.push(expires_at_ms);
    }

    /// Drop every pulse whose deadline has passed. Returns how many expired.
    pub fn expire(&mut self, now_ms: f64) -> usize {
        let before = self.deadlines.len();
        self.deadlines.retain(|&deadline| deadline > now_ms);
        before - self.deadlines.len()
    }

    pub fn active(&self) -> usize {
        self.deadlines.len()
    }

    pub fn multiplier(&self) -> f32 {
        2f32.powi(self.deadlines.len() as i32)
    }

    pub fn clear(&mut self) {
        self.deadlines.clear();
    }
}

/// Per-paddle state of the collision/miss protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactState {
    #[default]
    Tracking,
    /// Ball crossed the paddle's plane without being returned
    Missed,
}

/// Paddle component - fixed side, hit flash and contact tracking
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub hit: bool,
    pub hit_elapsed: f32,
    pub pulsed: bool,
    pub contact: ContactState,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            hit: false,
            hit_elapsed: 0.0,
            pulsed: false,
            contact: ContactState::Tracking,
        }
    }

    pub fn mark_hit(&mut self) {
        self.hit = true;
        self.hit_elapsed = 0.0;
    }

    /// Accumulate `dt` into the hit flash and clear it once `duration` has passed
    pub fn advance_flash(&mut self, dt: f32, duration: f32) {
        if !self.hit {
            return;
        }

        if self.hit_elapsed > duration {
            self.hit = false;
            self.pulsed = false;
            self.hit_elapsed = 0.0;
        } else {
            self.hit_elapsed += dt;
        }
    }
}

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Local player driven by input commands
    Human,
    /// Remote player; the host positions the paddle and reports its misses
    Opponent,
    /// Driven by [`ComputerAi`]
    Computer,
}

/// Player component, attached to the entity carrying the player's paddle
#[derive(Debug, Clone)]
pub struct Player {
    pub id: u8,
    pub name: String,
    pub score: u32,
    pub kind: PlayerKind,
}

impl Player {
    pub fn new(id: u8, name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            kind,
        }
    }

    pub fn award_point(&mut self) {
        self.score += 1;
    }
}

/// Decision state of the computer opponent
#[derive(Debug, Clone, Copy)]
pub struct ComputerAi {
    pub reaction_latency: f32,
    pub reaction_delay: f32,
    pub target_offset: f32,
    pub max_offset: f32,
    pub offset_change_frequency: f32,
    pub last_offset_change_time: f32,
    pub reaction_timer: f32,
    pub tolerance: f32,
}

impl ComputerAi {
    pub fn new() -> Self {
        Self {
            reaction_latency: Params::AI_REACTION_LATENCY,
            reaction_delay: Params::AI_REACTION_DELAY,
            target_offset: 0.0,
            max_offset: Params::AI_MAX_OFFSET,
            offset_change_frequency: Params::AI_OFFSET_CHANGE_FREQUENCY,
            last_offset_change_time: 0.0,
            reaction_timer: 0.0,
            tolerance: Params::AI_TOLERANCE,
        }
    }
}

impl Default for ComputerAi {
    fn default() -> Self {
        Self::new()
    }
}
