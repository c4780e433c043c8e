//! Event handling and cross-controller coordination.
//!
//! Every input reaches the library as an [`Event`]. [`handle_event`] routes it
//! to the pager, the carousel or both, and returns the actions the host must
//! apply. This is the only place the controllers meet:
//!
//! - a pager arrival fires the matching reveal one-shot
//! - touch input is offered to both the pager (vertical swipe) and the
//!   carousel (horizontal drag); their thresholds keep them apart
//!
//! # Event Types
//!
//! - **Lifecycle**: `Loaded`, `Resize`
//! - **Pager**: `Wheel`, `NavClick`
//! - **Touch**: `TouchStart`, `TouchMove`, `TouchEnd`
//! - **Carousel**: `HoverEnter`, `HoverLeave`, `ArrowClick`, `OverlayLinkClick`
//! - **Host callbacks**: `AutoplayTick`, `AnimationComplete`
//!
//! # Example
//!
//! ```rust
//! use showreel::app::{handle_event, AppState, Event};
//! use showreel::app::gesture::GestureThresholds;
//! use showreel::domain::SiteConfig;
//! use showreel::ui::MotionProfile;
//!
//! let mut state = AppState::new(SiteConfig::default(), &MotionProfile::default(), GestureThresholds::default());
//! let actions = handle_event(&mut state, &Event::Loaded { width: 1280.0, height: 800.0 })?;
//! assert!(!actions.is_empty());
//! # Ok::<(), showreel::ShowreelError>(())
//! ```

use crate::app::actions::{Action, Channel, Ticket, TimerId};
use crate::app::gesture::TouchPoint;
use crate::app::modes::Direction;
use crate::app::reveal::RevealKind;
use crate::app::AppState;
use crate::domain::error::Result;
use serde::{Deserialize, Serialize};

const fn one_touch() -> u32 {
    1
}

/// Inputs delivered by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// The page finished loading with the given viewport size.
    Loaded { width: f64, height: f64 },

    /// Wheel scroll; positive `delta_y` scrolls down.
    Wheel { delta_y: f64 },

    /// A nav button with index `index` was clicked.
    NavClick { index: usize },

    /// A finger touched the screen.
    TouchStart {
        x: f64,
        y: f64,
        time_ms: f64,
        /// Number of fingers now on the screen.
        #[serde(default = "one_touch")]
        touches: u32,
        /// Whether the touch began on the carousel.
        #[serde(default)]
        on_carousel: bool,
    },

    /// A finger moved.
    TouchMove {
        x: f64,
        y: f64,
        time_ms: f64,
        #[serde(default = "one_touch")]
        touches: u32,
    },

    /// A finger left the screen at the given position.
    TouchEnd { x: f64, y: f64, time_ms: f64 },

    /// The viewport was resized.
    Resize { width: f64, height: f64 },

    /// The pointer entered a carousel panel.
    HoverEnter,

    /// The pointer left a carousel panel.
    HoverLeave,

    /// A carousel arrow was clicked.
    ArrowClick { direction: Direction },

    /// An anchor inside the current overlay was clicked.
    OverlayLinkClick,

    /// A scheduled autoplay timer fired.
    AutoplayTick { timer: TimerId },

    /// A tween carrying `ticket` finished and its final values are applied.
    AnimationComplete { ticket: Ticket },
}

impl Event {
    /// Short name for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Loaded { .. } => "loaded",
            Self::Wheel { .. } => "wheel",
            Self::NavClick { .. } => "nav_click",
            Self::TouchStart { .. } => "touch_start",
            Self::TouchMove { .. } => "touch_move",
            Self::TouchEnd { .. } => "touch_end",
            Self::Resize { .. } => "resize",
            Self::HoverEnter => "hover_enter",
            Self::HoverLeave => "hover_leave",
            Self::ArrowClick { .. } => "arrow_click",
            Self::OverlayLinkClick => "overlay_link_click",
            Self::AutoplayTick { .. } => "autoplay_tick",
            Self::AnimationComplete { .. } => "animation_complete",
        }
    }
}

/// Processes an event, mutates state, and returns the actions to apply in order.
///
/// Input that cannot be acted on (out-of-range navigation, input during a
/// transition, multi-touch, gestures off the home section, stale callbacks)
/// yields an empty action list rather than an error.
///
/// # Errors
///
/// Currently never fails; the `Result` lets hosts treat every call uniformly.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<Vec<Action>> {
    let _span = tracing::debug_span!("handle_event", event_type = event.kind()).entered();

    let actions = match *event {
        Event::Loaded { width, height } => {
            state.set_viewport(width, height);
            state.bootstrap()
        }
        Event::Wheel { delta_y } => state.pager.on_wheel(delta_y),
        Event::NavClick { index } => state.pager.go_to(index),
        Event::TouchStart {
            x,
            y,
            time_ms,
            touches,
            on_carousel,
        } => {
            let point = TouchPoint { x, y, time_ms };
            if touches == 1 {
                state.pager.on_touch_start(point);
            } else {
                tracing::trace!(touches, "multi-touch, page swipe abandoned");
                state.pager.cancel_touch();
            }

            if on_carousel || touches != 1 {
                state.carousel.on_touch_start(point, touches)
            } else {
                vec![]
            }
        }
        Event::TouchMove { x, y, time_ms, touches } => {
            if touches != 1 {
                state.pager.cancel_touch();
            }
            state.carousel.on_touch_move(TouchPoint { x, y, time_ms }, touches)
        }
        Event::TouchEnd { x, y, time_ms } => {
            let point = TouchPoint { x, y, time_ms };
            let mut actions = state.pager.on_touch_end(point);
            actions.extend(state.carousel.on_touch_end(point));
            actions
        }
        Event::Resize { width, height } => {
            state.set_viewport(width, height);
            state.pager.on_resize(height)
        }
        Event::HoverEnter => state.carousel.on_hover(true),
        Event::HoverLeave => state.carousel.on_hover(false),
        Event::ArrowClick { direction } => state.carousel.on_arrow(direction),
        Event::OverlayLinkClick => state.carousel.guard_link_click(),
        Event::AutoplayTick { timer } => state.carousel.on_tick(timer),
        Event::AnimationComplete { ticket } => complete(state, ticket),
    };

    tracing::debug!(action_count = actions.len(), "event handled");
    Ok(actions)
}

/// Routes a completion to the controller that issued the ticket.
fn complete(state: &mut AppState, ticket: Ticket) -> Vec<Action> {
    match ticket.channel {
        Channel::Pager => {
            let Some((arrival, mut actions)) = state.pager.complete(ticket) else {
                return vec![];
            };
            if let Some(kind) = arrival.tag.as_ref().and_then(RevealKind::for_tag) {
                actions.extend(state.reveals.fire(kind));
            }
            actions
        }
        Channel::Carousel => state.carousel.complete(ticket).unwrap_or_default(),
    }
}
