//! Actions representing side effects to be applied by the host.
//!
//! The event handler never touches the page. It returns a `Vec<Action>` and
//! the host (a browser shim or [`HeadlessHost`](crate::runtime::HeadlessHost))
//! applies them in order. Tweens that gate a state transition carry a
//! [`Ticket`]; the host reports their completion back as
//! [`Event::AnimationComplete`](crate::app::Event::AnimationComplete) once the
//! final values are applied.
//!
//! # Example
//!
//! ```rust
//! use showreel::app::actions::{Action, Property, Target, Tween};
//!
//! let actions = vec![Action::Animate(Tween {
//!     target: Target::PageContainer,
//!     to: vec![Property::TranslateY(-800.0)],
//!     duration_ms: 900,
//!     delay_ms: 0,
//!     easing: "power3.inOut".to_string(),
//!     ticket: None,
//! })];
//! ```

use crate::app::reveal::RevealKind;
use crate::ui::viewmodel::CarouselView;
use serde::{Deserialize, Serialize};

/// Which controller issued a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Pager,
    Carousel,
}

/// Identifier of one in-flight tween whose completion must be reported back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Ticket {
    pub channel: Channel,
    pub seq: u64,
}

/// Handle of a scheduled autoplay timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(pub u64);

/// One of the three simultaneously rendered carousel panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Prev,
    Current,
    Next,
}

impl Slot {
    pub const ALL: [Self; 3] = [Self::Prev, Self::Current, Self::Next];

    /// Position of the slot in [`Slot::ALL`].
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::Prev => 0,
            Self::Current => 1,
            Self::Next => 2,
        }
    }
}

/// Element an action applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Target {
    /// The wrapper holding every section, moved vertically by the pager.
    PageContainer,
    /// One carousel panel.
    CarouselPanel { slot: Slot },
    /// The element wrapping all three panels.
    CarouselWrapper,
    /// The `ordinal`-th element named `element` inside a reveal section.
    RevealElement {
        reveal: RevealKind,
        element: String,
        ordinal: usize,
    },
}

/// Animatable style property and its value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "property", content = "value", rename_all = "snake_case")]
pub enum Property {
    /// Vertical offset in pixels.
    TranslateY(f64),
    /// Horizontal offset in pixels.
    TranslateX(f64),
    /// Horizontal offset as a percentage of the element's own width.
    TranslateXPercent(f64),
    /// Opacity in `0.0..=1.0`.
    Opacity(f64),
}

/// Request to animate `target` to the values in `to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub target: Target,
    pub to: Vec<Property>,
    pub duration_ms: u32,
    pub delay_ms: u32,
    /// Easing curve name understood by the host's tweening engine.
    pub easing: String,
    /// Completion ticket, if the issuing controller waits on this tween.
    pub ticket: Option<Ticket>,
}

/// Loading hints applied uniformly to every image on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageHints {
    /// Defer loading off-screen images (`loading="lazy"`).
    pub lazy: bool,
    /// Decode off the main thread (`decoding="async"`).
    pub async_decode: bool,
}

/// Side effects to be applied by the host, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Starts a tween. If it carries a ticket, the host must post
    /// `AnimationComplete` exactly once after the final values are applied.
    Animate(Tween),

    /// Sets style properties immediately, without animation.
    SetStyle {
        target: Target,
        props: Vec<Property>,
    },

    /// Marks nav button `active` as the only active one of `count`.
    HighlightNav { active: usize, count: usize },

    /// Replaces panel images, overlay content and the title display.
    RenderCarousel(CarouselView),

    /// Best-effort decode-ahead of an image that is about to be shown.
    Prefetch { image_src: String },

    /// Applies loading hints to all images.
    ApplyImageHints(ImageHints),

    /// Schedules a recurring autoplay timer; each firing is reported as
    /// `AutoplayTick { timer }`.
    ScheduleAutoplay { timer: TimerId, interval_ms: u32 },

    /// Clears a previously scheduled autoplay timer.
    CancelAutoplay { timer: TimerId },

    /// Prevents the default action of the click being handled and stops its
    /// propagation.
    SuppressClick,
}
