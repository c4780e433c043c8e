//! Headless runtime: a virtual-clock host and scripted replays.
//!
//! The library never touches a real page. This layer stands in for one so the
//! interaction logic can be driven end to end from tests and the CLI:
//!
//! ```text
//! ReplayScript → HeadlessHost::dispatch → handle_event → Actions
//!                      ↑                                    │
//!                      └── tween finished / timer fired ◄───┘ (virtual clock)
//! ```
//!
//! # Modules
//!
//! - [`host`]: Action interpreter, tween and timer scheduling
//! - [`scene`]: Recorded page state
//! - [`script`]: JSON replay scripts

pub mod host;
pub mod scene;
pub mod script;

pub use host::HeadlessHost;
pub use scene::Scene;
pub use script::{ReplayScript, ReplayStep};
