use serde::{Deserialize, Serialize};

use crate::components::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32,      // Delta time for this step, seconds
    pub now_ms: f64,  // Host clock at this frame
    pub elapsed: f32, // Total simulated time
}

impl Time {
    pub fn new(dt: f32, now_ms: f64) -> Self {
        Self {
            dt,
            now_ms,
            elapsed: 0.0,
        }
    }
}

/// Converts host timestamps into frame deltas
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous tick. The first tick has no meaningful delta and yields 0.
    /// A non-finite timestamp yields 0 and is not remembered.
    pub fn tick(&mut self, timestamp_ms: f64) -> f32 {
        if !timestamp_ms.is_finite() {
            log::warn!("ignoring non-finite clock timestamp {timestamp_ms}");
            return 0.0;
        }

        let dt = match self.last_ms {
            None => 0.0,
            Some(last) if timestamp_ms < last => {
                log::warn!("clock went backwards: {last} -> {timestamp_ms}");
                0.0
            }
            Some(last) => ((timestamp_ms - last) / 1000.0) as f32,
        };
        self.last_ms = Some(timestamp_ms);
        dt
    }

    /// Forget the previous timestamp so the next tick starts fresh
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Discrete input for a human-controlled paddle. Edge-triggered: the host debounces key repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    MoveUp,
    MoveDown,
    Stop,
    Pulse,
}

/// Ball left the field past the paddle guarding `conceding`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointEvent {
    pub conceding: Side,
    pub scoring: Side,
}

impl PointEvent {
    pub fn conceded_by(side: Side) -> Self {
        Self {
            conceding: side,
            scoring: side.opposite(),
        }
    }
}

/// Events that occurred during this frame, in emission order
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub points: Vec<PointEvent>,
    pub paddle_hits: Vec<Side>,
    pub pulses: Vec<Side>,
    pub wall_bounces: u32,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.paddle_hits.clear();
        self.pulses.clear();
        self.wall_bounces = 0;
    }
}

/// Commands queued by the host between frames
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<(Side, Command)>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push(&mut self, side: Side, command: Command) {
        self.inputs.push((side, command));
    }

    pub fn drain(&mut self) -> Vec<(Side, Command)> {
        std::mem::take(&mut self.inputs)
    }
}
