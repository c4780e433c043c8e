//! Application layer: controllers, events and actions.
//!
//! All interaction logic lives here, host-agnostic. Data flows one way:
//!
//! ```text
//! Host input → Event → handle_event → controller mutation → Actions → Host
//!                  ↑                                              │
//!                  └──── AnimationComplete / AutoplayTick ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects returned to the host (tweens, styles, timers)
//! - [`handler`]: Event routing and pager/carousel/reveal coordination
//! - [`modes`]: Idle/animating phase and direction types
//! - [`state`]: The state container wiring the controllers together
//! - [`pager`]: Section navigation state machine
//! - [`carousel`]: 3-up project carousel with autoplay and drag
//! - [`reveal`]: Play-once reveal sequences
//! - [`gesture`]: Touch samples and threshold classification
//! - [`shared`]: Read-only view of the active section

pub mod actions;
pub mod carousel;
pub mod gesture;
pub mod handler;
pub mod modes;
pub mod pager;
pub mod reveal;
pub mod shared;
pub mod state;

pub use actions::Action;
pub use carousel::Carousel;
pub use handler::{handle_event, Event};
pub use modes::{Direction, Phase};
pub use pager::Pager;
pub use reveal::{RevealKind, Reveals};
pub use state::AppState;
