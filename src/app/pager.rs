//! Full-viewport section pager.
//!
//! The page is a vertical stack of sections inside one container. The pager
//! moves the container so exactly one section fills the viewport. It is an
//! `Idle`/`Animating` machine over the section index:
//!
//! ```text
//!   Idle(i) ──go_to(t)──▶ Animating{t} ──AnimationComplete──▶ Idle(t)
//!     ▲                       │
//!     └── wheel/nav/swipe ────┘ dropped while animating
//! ```
//!
//! The index only changes when the container's tween reports completion, so
//! everything keyed on "current section" (nav highlight, reveals, carousel
//! gating) follows what the user actually sees.

use crate::app::actions::{Action, Channel, Property, Target, Ticket, Tween};
use crate::app::gesture::{GestureSample, GestureThresholds, TouchPoint};
use crate::app::modes::{Direction, Phase};
use crate::app::shared::{SectionCursor, SectionWatch};
use crate::domain::{Section, SectionTag};
use crate::ui::motion::PagerMotion;

/// Section the pager settled on after a completed transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrival {
    pub index: usize,
    pub tag: Option<SectionTag>,
}

/// Section navigation state machine.
#[derive(Debug)]
pub struct Pager {
    tags: Vec<Option<SectionTag>>,
    cursor: SectionCursor,
    phase: Phase,
    viewport_height: f64,
    /// Set when the viewport was resized mid-transition.
    resnap_pending: bool,
    swipe: Option<GestureSample>,
    next_seq: u64,
    motion: PagerMotion,
    thresholds: GestureThresholds,
}

impl Pager {
    #[must_use]
    pub fn new(sections: &[Section], motion: PagerMotion, thresholds: GestureThresholds) -> Self {
        Self {
            tags: sections.iter().map(|s| s.tag.clone()).collect(),
            cursor: SectionCursor::new(),
            phase: Phase::Idle,
            viewport_height: 0.0,
            resnap_pending: false,
            swipe: None,
            next_seq: 0,
            motion,
            thresholds,
        }
    }

    #[must_use]
    pub fn section_count(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.cursor.get()
    }

    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.phase.is_animating()
    }

    #[must_use]
    pub fn is_on_home(&self) -> bool {
        self.cursor.get() == 0
    }

    #[must_use]
    pub const fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Read-only handle for controllers that depend on the active section.
    #[must_use]
    pub fn watch(&self) -> SectionWatch {
        self.cursor.watch()
    }

    /// Records the viewport height without moving anything.
    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = height.max(0.0);
    }

    /// Vertical container offset that shows section `index`.
    fn offset_for(&self, index: usize) -> f64 {
        // usize -> f64 is exact for any realistic section count
        #[allow(clippy::cast_precision_loss)]
        let index = index as f64;
        -index * self.viewport_height
    }

    /// Places the container on the current section with no animation.
    #[must_use]
    pub fn snap(&self) -> Action {
        Action::SetStyle {
            target: Target::PageContainer,
            props: vec![Property::TranslateY(self.offset_for(self.current_index()))],
        }
    }

    /// Nav highlight for the current section.
    #[must_use]
    pub fn highlight(&self) -> Action {
        Action::HighlightNav {
            active: self.current_index(),
            count: self.section_count(),
        }
    }

    /// Starts an animated move to section `target`.
    ///
    /// Silently ignored when `target` is out of range, a transition is in
    /// flight, or `target` is already the current section.
    pub fn go_to(&mut self, target: usize) -> Vec<Action> {
        if target >= self.section_count() {
            tracing::debug!(target, sections = self.section_count(), "go_to out of range, ignored");
            return vec![];
        }
        if self.phase.is_animating() {
            tracing::debug!(target, "go_to while transitioning, dropped");
            return vec![];
        }
        if target == self.current_index() {
            return vec![];
        }

        let ticket = Ticket {
            channel: Channel::Pager,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.phase = Phase::Animating { target, ticket };

        tracing::debug!(from = self.current_index(), to = target, seq = ticket.seq, "page transition started");

        vec![Action::Animate(Tween {
            target: Target::PageContainer,
            to: vec![Property::TranslateY(self.offset_for(target))],
            duration_ms: self.motion.duration_ms,
            delay_ms: 0,
            easing: self.motion.easing.clone(),
            ticket: Some(ticket),
        })]
    }

    /// Moves one section in `direction`, if there is one.
    pub fn step(&mut self, direction: Direction) -> Vec<Action> {
        let target = match direction {
            Direction::Next => self.current_index().checked_add(1),
            Direction::Previous => self.current_index().checked_sub(1),
        };
        target.map_or_else(Vec::new, |t| self.go_to(t))
    }

    /// Wheel input: positive delta scrolls down a section, negative up.
    pub fn on_wheel(&mut self, delta_y: f64) -> Vec<Action> {
        if self.phase.is_animating() || delta_y == 0.0 || delta_y.is_nan() {
            return vec![];
        }
        let direction = if delta_y > 0.0 { Direction::Next } else { Direction::Previous };
        self.step(direction)
    }

    /// Records the start of a possible page swipe.
    pub fn on_touch_start(&mut self, point: TouchPoint) {
        self.swipe = Some(point.into());
    }

    /// Abandons the current swipe (e.g. a second finger landed).
    pub fn cancel_touch(&mut self) {
        self.swipe = None;
    }

    /// Classifies the finished touch and navigates on a page swipe.
    pub fn on_touch_end(&mut self, point: TouchPoint) -> Vec<Action> {
        let Some(sample) = self.swipe.take() else {
            return vec![];
        };
        let displacement = sample.displacement_to(point);

        match self.thresholds.page_swipe(displacement) {
            Some(direction) => {
                tracing::debug!(?direction, dy = displacement.dy, "page swipe");
                self.step(direction)
            }
            None => {
                tracing::trace!(dx = displacement.dx, dy = displacement.dy, elapsed = displacement.elapsed_ms, "touch is not a page swipe");
                vec![]
            }
        }
    }

    /// Viewport resize: keeps the index and re-snaps the container.
    ///
    /// Mid-transition the snap is deferred to completion so the running tween
    /// is not fought.
    pub fn on_resize(&mut self, height: f64) -> Vec<Action> {
        self.set_viewport_height(height);
        if self.phase.is_animating() {
            self.resnap_pending = true;
            return vec![];
        }
        vec![self.snap()]
    }

    /// Handles completion of a pager tween.
    ///
    /// Returns `None` for tickets that do not belong to the transition in
    /// flight, so each transition completes exactly once.
    pub fn complete(&mut self, ticket: Ticket) -> Option<(Arrival, Vec<Action>)> {
        let Phase::Animating { target, ticket: expected } = self.phase else {
            tracing::debug!(seq = ticket.seq, "pager completion with no transition in flight, ignored");
            return None;
        };
        if ticket != expected {
            tracing::debug!(seq = ticket.seq, expected = expected.seq, "stale pager completion, ignored");
            return None;
        }

        self.cursor.set(target);
        self.phase = Phase::Idle;
        tracing::debug!(index = target, "page transition complete");

        let mut actions = vec![self.highlight()];
        if std::mem::take(&mut self.resnap_pending) {
            actions.push(self.snap());
        }

        let arrival = Arrival {
            index: target,
            tag: self.tags.get(target).cloned().flatten(),
        };
        Some((arrival, actions))
    }
}
