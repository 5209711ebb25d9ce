//! Message protocol between a host shell and the simulation core
//!
//! Uses postcard for compact binary serialization, so a worker or socket
//! boundary can carry frames without a JSON layer.

use postcard::{from_bytes, to_allocvec};
use pulse_core::{Command, Match, PointEvent, SessionState, Side, Snapshot};

// ============================================================================
// Host -> Core
// ============================================================================

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum HostMsg {
    Start,
    Pause,
    Resume,
    Stop,

    /// Paddle command for the given side, applied on the next frame
    Command { side: Side, command: Command },

    /// Animation frame at host timestamp `t_ms`
    Frame { t_ms: f64 },

    /// Remote opponent's paddle position
    Opponent { side: Side, y: f32 },

    /// Remote opponent let the ball through
    Concede { side: Side },
}

// ============================================================================
// Core -> Host
// ============================================================================

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum CoreMsg {
    /// State after an advanced frame, plus the points conceded during it
    Frame {
        snapshot: Snapshot,
        points: Vec<PointEvent>,
    },

    /// Outcome of a session control message
    Session { state: SessionState, success: bool },
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl HostMsg {
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl CoreMsg {
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

/// Apply a host message to the match, returning the reply if there is one.
///
/// Frames that do not advance (paused, stopped, idle) produce no reply.
pub fn dispatch(game: &mut Match, msg: HostMsg) -> Option<CoreMsg> {
    let transition = match msg {
        HostMsg::Start => game.start(),
        HostMsg::Pause => game.pause(),
        HostMsg::Resume => game.resume(),
        HostMsg::Stop => game.stop(),
        HostMsg::Command { side, command } => {
            game.command(side, command);
            return None;
        }
        HostMsg::Frame { t_ms } => {
            if !game.frame(t_ms) {
                return None;
            }
            return Some(CoreMsg::Frame {
                snapshot: game.snapshot(),
                points: game.events().points.clone(),
            });
        }
        HostMsg::Opponent { side, y } => {
            game.place_opponent(side, y);
            return None;
        }
        HostMsg::Concede { side } => {
            game.concede(side);
            return None;
        }
    };

    Some(CoreMsg::Session {
        state: transition.to,
        success: transition.success,
    })
}
