//! Match Session State Machine
//!
//! Gates the frame loop so a host can pause or tear the simulation down deterministically.

use serde::{Deserialize, Serialize};

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Idle,
    Running,
    Paused,
    /// Terminal; the match no longer advances
    Stopped,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionAction {
    Start,
    Pause,
    Resume,
    Stop,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub success: bool,
    pub from: SessionState,
    pub to: SessionState,
    pub action: SessionAction,
}

/// Session Finite State Machine
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: SessionAction) -> bool {
        self.next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: SessionAction) -> Transition {
        let from = self.state;

        if let Some(next) = self.next_state(action) {
            self.state = next;
            log::info!("session {from:?} -> {next:?} ({action:?})");
            Transition {
                success: true,
                from,
                to: next,
                action,
            }
        } else {
            log::debug!("session ignores {action:?} while {from:?}");
            Transition {
                success: false,
                from,
                to: from,
                action,
            }
        }
    }

    fn next_state(&self, action: SessionAction) -> Option<SessionState> {
        use SessionAction::*;
        use SessionState::*;

        match (self.state, action) {
            (Idle, Start) => Some(Running),
            (Running, Pause) => Some(Paused),
            (Paused, Resume) => Some(Running),
            (Idle | Running | Paused, Stop) => Some(Stopped),
            _ => None,
        }
    }
}
