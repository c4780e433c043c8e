//! Phase and direction types shared by the pager and the carousel.
//!
//! Both controllers are two-state machines over an index:
//! - **Idle**: accepts new transitions
//! - **Animating**: one transition in flight, identified by its [`Ticket`];
//!   conflicting input is dropped, not queued
//!
//! # Example
//!
//! ```rust
//! use showreel::app::modes::{Direction, Phase};
//!
//! let phase = Phase::Idle;
//! assert!(!phase.is_animating());
//! assert_eq!(Direction::Next.step(), 1);
//! ```

use crate::app::actions::Ticket;
use serde::{Deserialize, Serialize};

/// Transition state of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No transition in flight.
    Idle,

    /// A transition toward `target` is in flight.
    ///
    /// Only the completion carrying `ticket` ends it.
    Animating {
        /// Index the controller settles on when the transition completes.
        target: usize,
        /// Ticket attached to the tween whose completion ends the transition.
        ticket: Ticket,
    },
}

impl Phase {
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        matches!(self, Self::Animating { .. })
    }
}

/// Direction of travel through a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Signed index step: `-1` for previous, `+1` for next.
    #[must_use]
    pub const fn step(self) -> isize {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}
