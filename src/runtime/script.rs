//! Replay scripts: timed event sequences for the headless host.
//!
//! A script is JSON:
//!
//! ```json
//! {
//!   "steps": [
//!     { "event": { "type": "loaded", "width": 1280, "height": 800 } },
//!     { "after_ms": 100, "event": { "type": "wheel", "delta_y": 120 } },
//!     { "after_ms": 2000 }
//!   ]
//! }
//! ```
//!
//! Each step first advances the clock by `after_ms`, then dispatches its event
//! if it has one. A step without an event just lets time pass.

use crate::app::Event;
use crate::domain::error::{Result, ShowreelError};
use crate::runtime::host::HeadlessHost;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReplayStep {
    #[serde(default)]
    pub after_ms: u64,
    #[serde(default)]
    pub event: Option<Event>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub steps: Vec<ReplayStep>,
}

impl ReplayScript {
    /// # Errors
    ///
    /// Returns [`ShowreelError::Replay`] if the JSON does not describe a script.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ShowreelError::Replay(e.to_string()))
    }

    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or
    /// [`ShowreelError::Replay`] if it does not parse.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
            .map_err(|e| ShowreelError::Replay(format!("{}: {e}", path.display())))
    }

    /// Plays every step against `host`, then lets running tweens finish.
    ///
    /// # Errors
    ///
    /// Propagates errors from event handling.
    pub fn run(&self, host: &mut HeadlessHost) -> Result<()> {
        let _span = tracing::debug_span!("replay", steps = self.steps.len()).entered();

        for (n, step) in self.steps.iter().enumerate() {
            host.advance(step.after_ms)?;
            if let Some(event) = &step.event {
                tracing::trace!(step = n, at_ms = host.now_ms(), event = event.kind(), "replaying");
                host.dispatch(event)?;
            }
        }
        host.settle()?;

        tracing::debug!(now_ms = host.now_ms(), "replay finished");
        Ok(())
    }
}
