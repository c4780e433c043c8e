//! Deterministic host with a virtual clock.
//!
//! `HeadlessHost` plays the browser's part: it applies actions to a
//! [`Scene`], runs tweens to completion after their delay and duration, fires
//! autoplay timers, and posts the resulting `AnimationComplete` and
//! `AutoplayTick` events back through [`handle_event`]. Time only moves when
//! [`advance`](HeadlessHost::advance) or [`settle`](HeadlessHost::settle) is
//! called, so scenarios are reproducible.

use crate::app::actions::{Action, Target, TimerId, Tween};
use crate::app::{handle_event, AppState, Event};
use crate::domain::error::Result;
use crate::runtime::scene::{reveal_name, Scene};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// Work due at a point on the virtual clock.
#[derive(Debug)]
enum Job {
    /// Apply a tween's final values, then report its ticket.
    Finish(Tween),
    /// Fire an autoplay timer.
    Tick(TimerId),
}

/// Headless implementation of the host boundary.
#[derive(Debug)]
pub struct HeadlessHost {
    state: AppState,
    now_ms: u64,
    /// `(due_ms, seq)` keys in due order; `seq` breaks ties by scheduling order.
    queue: BinaryHeap<Reverse<(u64, u64)>>,
    jobs: HashMap<u64, Job>,
    next_seq: u64,
    timers: HashMap<TimerId, u32>,
    scene: Scene,
}

impl HeadlessHost {
    #[must_use]
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            now_ms: 0,
            queue: BinaryHeap::new(),
            jobs: HashMap::new(),
            next_seq: 0,
            timers: HashMap::new(),
            scene: Scene::default(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of autoplay timers currently scheduled.
    #[must_use]
    pub fn active_timers(&self) -> usize {
        self.timers.len()
    }

    /// Whether any tween is still running.
    #[must_use]
    pub fn has_running_tweens(&self) -> bool {
        self.jobs.values().any(|job| matches!(job, Job::Finish(_)))
    }

    /// Delivers `event` and applies the resulting actions.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub fn dispatch(&mut self, event: &Event) -> Result<()> {
        let actions = handle_event(&mut self.state, event)?;
        for action in actions {
            self.apply(action);
        }
        Ok(())
    }

    fn schedule(&mut self, due_ms: u64, job: Job) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse((due_ms, seq)));
        self.jobs.insert(seq, job);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Animate(tween) => {
                if let Target::RevealElement { reveal, .. } = &tween.target {
                    *self.scene.reveal_tweens.entry(reveal_name(*reveal).to_string()).or_default() += 1;
                }
                let due = self.now_ms + u64::from(tween.delay_ms) + u64::from(tween.duration_ms);
                self.schedule(due, Job::Finish(tween));
            }
            Action::SetStyle { target, props } => self.scene.apply(&target, &props),
            Action::HighlightNav { active, count } => {
                self.scene.nav = (0..count).map(|i| i == active).collect();
            }
            Action::RenderCarousel(view) => self.scene.carousel = Some(view),
            Action::Prefetch { image_src } => self.scene.prefetched.push(image_src),
            Action::ApplyImageHints(hints) => self.scene.image_hints = Some(hints),
            Action::ScheduleAutoplay { timer, interval_ms } => {
                self.timers.insert(timer, interval_ms);
                self.scene.max_concurrent_timers = self.scene.max_concurrent_timers.max(self.timers.len());
                self.schedule(self.now_ms + u64::from(interval_ms), Job::Tick(timer));
            }
            Action::CancelAutoplay { timer } => {
                self.timers.remove(&timer);
            }
            Action::SuppressClick => self.scene.suppressed_clicks += 1,
        }
    }

    fn run(&mut self, job: Job) -> Result<()> {
        match job {
            Job::Finish(tween) => {
                self.scene.apply(&tween.target, &tween.to);
                if let Some(ticket) = tween.ticket {
                    self.dispatch(&Event::AnimationComplete { ticket })?;
                }
            }
            Job::Tick(timer) => {
                // cleared timers are dropped here; a rescheduled id never reuses an old one
                if let Some(&interval) = self.timers.get(&timer) {
                    self.schedule(self.now_ms + u64::from(interval), Job::Tick(timer));
                    self.dispatch(&Event::AutoplayTick { timer })?;
                }
            }
        }
        Ok(())
    }

    /// Moves the clock forward by `ms`, running everything that falls due.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub fn advance(&mut self, ms: u64) -> Result<()> {
        self.advance_to(self.now_ms.saturating_add(ms))
    }

    fn advance_to(&mut self, until_ms: u64) -> Result<()> {
        while let Some(&Reverse((due, seq))) = self.queue.peek() {
            if due > until_ms {
                break;
            }
            self.queue.pop();
            self.now_ms = self.now_ms.max(due);
            if let Some(job) = self.jobs.remove(&seq) {
                self.run(job)?;
            }
        }
        self.now_ms = self.now_ms.max(until_ms);
        Ok(())
    }

    /// Runs the clock until no tween is running. Timers that fall due on the
    /// way fire normally.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub fn settle(&mut self) -> Result<()> {
        while let Some(due) = self.next_finish_due() {
            self.advance_to(due)?;
        }
        Ok(())
    }

    fn next_finish_due(&self) -> Option<u64> {
        self.queue
            .iter()
            .filter(|Reverse((_, seq))| matches!(self.jobs.get(seq), Some(Job::Finish(_))))
            .map(|Reverse((due, _))| *due)
            .min()
    }
}
