//! Rotating 3-up project carousel.
//!
//! Three panels (prev, current, next) are rendered at once over a cyclic index
//! into the project list. A step slides all three panels by one panel width
//! while the wrapper dips in opacity. When the slide completes, the images are
//! swapped and the panels jump back to rest, so the motion reads as one
//! continuous slide.
//!
//! Inputs:
//! - autoplay timer (one at a time, restarted from zero on resume)
//! - arrow clicks
//! - hover and touch pause/resume
//! - horizontal touch drag, honoured only while the page rests on the home section
//!
//! A touch that moved past the drag threshold also arms the overlay link guard
//! until the next touch starts.

use crate::app::actions::{Action, Channel, Property, Slot, Target, Ticket, TimerId, Tween};
use crate::app::gesture::{GestureSample, GestureThresholds, TouchPoint};
use crate::app::modes::{Direction, Phase};
use crate::app::shared::SectionWatch;
use crate::domain::project::present;
use crate::domain::Project;
use crate::ui::motion::CarouselMotion;
use crate::ui::overlay::build_overlay;
use crate::ui::viewmodel::{CarouselView, PanelView};

/// Touch gesture in progress on the carousel.
#[derive(Debug, Clone, Copy)]
struct Drag {
    sample: GestureSample,
    /// Vertical movement handed this gesture to the pager.
    ceded: bool,
    /// A second finger landed; the gesture can only snap back.
    aborted: bool,
}

/// Carousel state machine.
#[derive(Debug)]
pub struct Carousel {
    projects: Vec<Project>,
    index: usize,
    phase: Phase,
    timer: Option<TimerId>,
    next_timer: u64,
    next_seq: u64,
    home: SectionWatch,
    drag: Option<Drag>,
    was_drag: bool,
    motion: CarouselMotion,
    thresholds: GestureThresholds,
}

impl Carousel {
    /// Creates a carousel over `projects`, gated on the pager through `home`.
    #[must_use]
    pub fn new(projects: Vec<Project>, home: SectionWatch, motion: CarouselMotion, thresholds: GestureThresholds) -> Self {
        Self {
            projects,
            index: 0,
            phase: Phase::Idle,
            timer: None,
            next_timer: 0,
            next_seq: 0,
            home,
            drag: None,
            was_drag: false,
            motion,
            thresholds,
        }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.phase.is_animating()
    }

    /// Handle of the scheduled autoplay timer, if autoplay is running.
    #[must_use]
    pub const fn autoplay_timer(&self) -> Option<TimerId> {
        self.timer
    }

    /// Whether the last touch gesture was a drag rather than a tap.
    #[must_use]
    pub const fn was_drag(&self) -> bool {
        self.was_drag
    }

    /// Reduces a signed logical index onto the project list.
    fn wrap(&self, index: isize) -> usize {
        // project lists are far below isize::MAX
        #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
        let wrapped = index.rem_euclid(self.projects.len() as isize) as usize;
        wrapped
    }

    /// Computes the view at `index`; `None` when there are no projects.
    #[must_use]
    pub fn view(&self, index: usize) -> Option<CarouselView> {
        if self.projects.is_empty() {
            return None;
        }

        #[allow(clippy::cast_possible_wrap)]
        let signed = index as isize;
        let cur = self.wrap(signed);
        let prev = self.wrap(signed - 1);
        let next = self.wrap(signed + 1);

        let panels = [(Slot::Prev, prev), (Slot::Current, cur), (Slot::Next, next)]
            .into_iter()
            .map(|(slot, project_index)| PanelView {
                slot,
                project_index,
                image_src: self.projects[project_index].image_src.clone(),
            })
            .collect();

        let project = &self.projects[cur];
        Some(CarouselView {
            index: cur,
            panels,
            overlay: build_overlay(project),
            title: project.title.clone(),
            subtitle: present(&project.kind).unwrap_or_default().to_string(),
        })
    }

    /// Renders the carousel at `index` and prefetches the neighbouring images.
    #[must_use]
    pub fn render(&self, index: usize) -> Vec<Action> {
        let Some(view) = self.view(index) else {
            return vec![];
        };

        let current_src = view.panels[Slot::Current.position()].image_src.clone();
        let mut prefetched: Vec<String> = Vec::with_capacity(2);
        for slot in [Slot::Prev, Slot::Next] {
            let src = &view.panels[slot.position()].image_src;
            if *src != current_src && !prefetched.contains(src) {
                prefetched.push(src.clone());
            }
        }

        let mut actions = vec![Action::RenderCarousel(view)];
        actions.extend(prefetched.into_iter().map(|image_src| Action::Prefetch { image_src }));
        actions
    }

    /// Starts a one-step slide in `direction`.
    ///
    /// Ignored while a slide is in flight or when there is nothing to rotate to.
    pub fn advance(&mut self, direction: Direction) -> Vec<Action> {
        if self.phase.is_animating() || self.projects.len() < 2 {
            return vec![];
        }

        #[allow(clippy::cast_possible_wrap)]
        let target = self.wrap(self.index as isize + direction.step());
        let ticket = Ticket {
            channel: Channel::Carousel,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.phase = Phase::Animating { target, ticket };

        tracing::debug!(from = self.index, to = target, ?direction, "carousel step started");

        // panels travel against the direction of navigation: next slides left
        #[allow(clippy::cast_precision_loss)]
        let shift = -(direction.step() as f64) * self.motion.shift_percent;

        let mut actions: Vec<Action> = Slot::ALL
            .into_iter()
            .map(|slot| {
                Action::Animate(Tween {
                    target: Target::CarouselPanel { slot },
                    to: vec![Property::TranslateXPercent(shift)],
                    duration_ms: self.motion.duration_ms,
                    delay_ms: 0,
                    easing: self.motion.easing.clone(),
                    ticket: None,
                })
            })
            .collect();

        let leg = self.motion.dip_leg_ms();
        actions.push(Action::Animate(Tween {
            target: Target::CarouselWrapper,
            to: vec![Property::Opacity(self.motion.dip_opacity)],
            duration_ms: leg,
            delay_ms: 0,
            easing: self.motion.easing.clone(),
            ticket: None,
        }));
        // the recovery leg is issued last and ends with the step, so completion
        // sees every panel landed and the wrapper back at full opacity
        actions.push(Action::Animate(Tween {
            target: Target::CarouselWrapper,
            to: vec![Property::Opacity(1.0)],
            duration_ms: self.motion.duration_ms - leg,
            delay_ms: leg,
            easing: self.motion.easing.clone(),
            ticket: Some(ticket),
        }));

        actions
    }

    /// Handles completion of a carousel slide: re-render at the new index and
    /// put the panels back at rest.
    ///
    /// Returns `None` for tickets that do not belong to the slide in flight.
    pub fn complete(&mut self, ticket: Ticket) -> Option<Vec<Action>> {
        let Phase::Animating { target, ticket: expected } = self.phase else {
            return None;
        };
        if ticket != expected {
            tracing::debug!(seq = ticket.seq, expected = expected.seq, "stale carousel completion, ignored");
            return None;
        }

        self.index = target;
        self.phase = Phase::Idle;
        tracing::debug!(index = target, "carousel step complete");

        let mut actions = self.render(target);
        actions.extend(Slot::ALL.into_iter().map(|slot| Action::SetStyle {
            target: Target::CarouselPanel { slot },
            props: vec![Property::TranslateXPercent(0.0), Property::TranslateX(0.0)],
        }));
        Some(actions)
    }

    /// Schedules autoplay from zero elapsed time, clearing any existing timer first.
    pub fn start_autoplay(&mut self) -> Vec<Action> {
        let mut actions = self.stop_autoplay();
        if self.projects.len() < 2 {
            return actions;
        }

        let timer = TimerId(self.next_timer);
        self.next_timer += 1;
        self.timer = Some(timer);
        tracing::trace!(timer = timer.0, "autoplay scheduled");

        actions.push(Action::ScheduleAutoplay {
            timer,
            // a zero interval would fire continuously
            interval_ms: self.motion.autoplay_interval_ms.max(1),
        });
        actions
    }

    /// Clears the autoplay timer, if any.
    pub fn stop_autoplay(&mut self) -> Vec<Action> {
        self.timer.take().map_or_else(Vec::new, |timer| {
            tracing::trace!(timer = timer.0, "autoplay cleared");
            vec![Action::CancelAutoplay { timer }]
        })
    }

    /// Autoplay firing. Ticks from cleared timers are ignored.
    pub fn on_tick(&mut self, timer: TimerId) -> Vec<Action> {
        if self.timer != Some(timer) {
            tracing::trace!(timer = timer.0, "stale autoplay tick, ignored");
            return vec![];
        }
        self.advance(Direction::Next)
    }

    /// Pointer entered (`true`) or left (`false`) a panel.
    pub fn on_hover(&mut self, entered: bool) -> Vec<Action> {
        if entered {
            self.stop_autoplay()
        } else {
            self.start_autoplay()
        }
    }

    /// Arrow click: step, and give the user a full interval before the next
    /// automatic step.
    pub fn on_arrow(&mut self, direction: Direction) -> Vec<Action> {
        let mut actions = self.stop_autoplay();
        actions.extend(self.advance(direction));
        actions.extend(self.start_autoplay());
        actions
    }

    /// Touch start on the carousel.
    ///
    /// Ignored unless the page rests on the home section. A second finger
    /// aborts the gesture in progress.
    pub fn on_touch_start(&mut self, point: TouchPoint, touches: u32) -> Vec<Action> {
        if touches != 1 {
            if let Some(drag) = self.drag.as_mut() {
                drag.aborted = true;
            }
            return vec![];
        }
        if !self.home.is_home() {
            return vec![];
        }

        self.drag = Some(Drag {
            sample: point.into(),
            ceded: false,
            aborted: false,
        });
        self.was_drag = false;
        self.stop_autoplay()
    }

    /// Touch move: damped drag feedback, or cede to the pager on vertical movement.
    pub fn on_touch_move(&mut self, point: TouchPoint, touches: u32) -> Vec<Action> {
        let Some(drag) = self.drag.as_mut() else {
            return vec![];
        };
        if touches != 1 {
            drag.aborted = true;
        }
        if drag.aborted || drag.ceded {
            return vec![];
        }

        let d = drag.sample.displacement_to(point);
        if self.thresholds.cedes_to_pager(d) {
            tracing::trace!(dy = d.dy, "carousel drag ceded to pager");
            drag.ceded = true;
            return vec![];
        }

        if self.thresholds.is_drag(d) {
            self.was_drag = true;
        }

        Slot::ALL
            .into_iter()
            .map(|slot| {
                let factor = if slot == Slot::Current {
                    self.thresholds.drag_damping_current
                } else {
                    self.thresholds.drag_damping_neighbor
                };
                Action::SetStyle {
                    target: Target::CarouselPanel { slot },
                    props: vec![Property::TranslateX(d.dx * factor)],
                }
            })
            .collect()
    }

    /// Touch end: snap back, commit a step if the drag qualifies, resume autoplay.
    pub fn on_touch_end(&mut self, point: TouchPoint) -> Vec<Action> {
        let Some(drag) = self.drag.take() else {
            return vec![];
        };

        let mut actions: Vec<Action> = Slot::ALL
            .into_iter()
            .map(|slot| {
                Action::Animate(Tween {
                    target: Target::CarouselPanel { slot },
                    to: vec![Property::TranslateX(0.0)],
                    duration_ms: self.motion.snap_back_ms,
                    delay_ms: 0,
                    easing: self.motion.snap_back_easing.clone(),
                    ticket: None,
                })
            })
            .collect();

        let d = drag.sample.displacement_to(point);
        let step = if drag.aborted || drag.ceded {
            None
        } else {
            self.thresholds.carousel_step(d)
        };

        match step {
            Some(direction) => {
                tracing::debug!(?direction, dx = d.dx, "carousel drag committed");
                actions.extend(self.advance(direction));
            }
            None => {
                tracing::trace!(dx = d.dx, dy = d.dy, elapsed = d.elapsed_ms, "carousel drag snapped back");
            }
        }

        actions.extend(self.start_autoplay());
        actions
    }

    /// Click on an overlay anchor: suppressed if the preceding touch was a drag.
    #[must_use]
    pub fn guard_link_click(&self) -> Vec<Action> {
        if self.was_drag {
            tracing::debug!("overlay link click after drag suppressed");
            vec![Action::SuppressClick]
        } else {
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::shared::SectionCursor;
    use crate::ui::MotionProfile;

    fn projects(n: usize) -> Vec<Project> {
        (0..n).map(|i| Project::new(format!("P{i}"), format!("p{i}.jpg"))).collect()
    }

    fn carousel(n: usize) -> (Carousel, SectionCursor) {
        let cursor = SectionCursor::new();
        let carousel = Carousel::new(
            projects(n),
            cursor.watch(),
            MotionProfile::default().carousel,
            GestureThresholds::default(),
        );
        (carousel, cursor)
    }

    fn ticket_of(actions: &[Action]) -> Option<Ticket> {
        actions.iter().find_map(|a| match a {
            Action::Animate(tween) => tween.ticket,
            _ => None,
        })
    }

    fn at(x: f64, y: f64, time_ms: f64) -> TouchPoint {
        TouchPoint { x, y, time_ms }
    }

    #[test]
    fn view_wraps_neighbours_at_both_ends() {
        let (carousel, _) = carousel(4);
        let view = carousel.view(0).unwrap();
        let indices: Vec<usize> = view.panels.iter().map(|p| p.project_index).collect();
        assert_eq!(indices, vec![3, 0, 1]);

        let view = carousel.view(3).unwrap();
        let indices: Vec<usize> = view.panels.iter().map(|p| p.project_index).collect();
        assert_eq!(indices, vec![2, 3, 0]);
    }

    #[test]
    fn render_prefetches_neighbours_once() {
        let (carousel, _) = carousel(2);
        let actions = carousel.render(0);
        let prefetches = actions.iter().filter(|a| matches!(a, Action::Prefetch { .. })).count();
        assert_eq!(prefetches, 1);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let (mut carousel, _) = carousel(0);
        assert!(carousel.render(0).is_empty());
        assert!(carousel.advance(Direction::Next).is_empty());
        assert!(carousel.start_autoplay().is_empty());
    }

    #[test]
    fn advance_settles_only_on_its_own_completion() {
        let (mut carousel, _) = carousel(3);
        let actions = carousel.advance(Direction::Previous);
        let ticket = ticket_of(&actions).unwrap();
        assert!(carousel.advance(Direction::Next).is_empty());

        let after = carousel.complete(ticket).unwrap();
        assert_eq!(carousel.index(), 2);
        assert!(matches!(after[0], Action::RenderCarousel(ref v) if v.index == 2));
        assert!(carousel.complete(ticket).is_none());
    }

    #[test]
    fn next_slides_panels_left() {
        let (mut carousel, _) = carousel(3);
        let actions = carousel.advance(Direction::Next);
        let Action::Animate(tween) = &actions[0] else {
            panic!("expected tween");
        };
        let Property::TranslateXPercent(shift) = tween.to[0] else {
            panic!("expected xPercent");
        };
        assert!(shift < 0.0);
    }

    #[test]
    fn step_completes_with_the_wrapper_back_at_full_opacity() {
        let (mut carousel, _) = carousel(3);
        let actions = carousel.advance(Direction::Next);

        let Some(Action::Animate(last)) = actions.last() else {
            panic!("expected the recovery tween last");
        };
        assert_eq!(last.target, Target::CarouselWrapper);
        assert_eq!(last.to, vec![Property::Opacity(1.0)]);
        assert!(last.ticket.is_some());
        assert_eq!(last.delay_ms + last.duration_ms, 600);

        let carried: Vec<_> = actions
            .iter()
            .filter(|a| matches!(a, Action::Animate(t) if t.ticket.is_some()))
            .collect();
        assert_eq!(carried.len(), 1);
        for action in &actions {
            if let Action::Animate(tween) = action {
                assert!(tween.delay_ms + tween.duration_ms <= 600);
            }
        }
    }

    #[test]
    fn zero_autoplay_interval_is_clamped() {
        let mut motion = MotionProfile::default().carousel;
        motion.autoplay_interval_ms = 0;
        let mut carousel = Carousel::new(projects(3), SectionCursor::new().watch(), motion, GestureThresholds::default());

        let actions = carousel.start_autoplay();
        assert!(matches!(actions[0], Action::ScheduleAutoplay { interval_ms: 1, .. }));
    }

    #[test]
    fn restarting_autoplay_clears_the_previous_timer() {
        let (mut carousel, _) = carousel(3);
        let first = carousel.start_autoplay();
        assert_eq!(first.len(), 1);
        let second = carousel.start_autoplay();
        assert_eq!(second[0], Action::CancelAutoplay { timer: TimerId(0) });
        assert!(matches!(second[1], Action::ScheduleAutoplay { timer: TimerId(1), .. }));
        assert!(carousel.on_tick(TimerId(0)).is_empty());
        assert!(!carousel.on_tick(TimerId(1)).is_empty());
    }

    #[test]
    fn touch_is_ignored_off_home() {
        let (mut carousel, cursor) = carousel(3);
        carousel.start_autoplay();
        cursor.set(1);
        assert!(carousel.on_touch_start(at(200.0, 300.0, 0.0), 1).is_empty());
        assert!(carousel.on_touch_end(at(100.0, 300.0, 200.0)).is_empty());
        assert!(carousel.autoplay_timer().is_some());
    }

    #[test]
    fn drag_moves_current_panel_more_than_neighbours() {
        let (mut carousel, _) = carousel(3);
        carousel.on_touch_start(at(200.0, 300.0, 0.0), 1);
        let actions = carousel.on_touch_move(at(160.0, 302.0, 50.0), 1);

        let offsets: Vec<f64> = actions
            .iter()
            .map(|a| match a {
                Action::SetStyle { props, .. } => match props[0] {
                    Property::TranslateX(x) => x,
                    _ => panic!("expected translateX"),
                },
                _ => panic!("expected style"),
            })
            .collect();
        assert!(offsets[1].abs() > offsets[0].abs());
        assert!(offsets[1].abs() > offsets[2].abs());
        assert!(carousel.was_drag());
    }

    #[test]
    fn vertical_move_cedes_the_gesture() {
        let (mut carousel, _) = carousel(3);
        carousel.on_touch_start(at(200.0, 300.0, 0.0), 1);
        assert!(carousel.on_touch_move(at(190.0, 250.0, 60.0), 1).is_empty());
        let actions = carousel.on_touch_end(at(100.0, 300.0, 200.0));
        assert!(ticket_of(&actions).is_none());
        assert!(!carousel.is_animating());
    }

    #[test]
    fn second_finger_aborts_commit_but_resumes_autoplay() {
        let (mut carousel, _) = carousel(3);
        carousel.on_touch_start(at(200.0, 300.0, 0.0), 1);
        carousel.on_touch_start(at(250.0, 300.0, 20.0), 2);
        let actions = carousel.on_touch_end(at(100.0, 300.0, 200.0));
        assert!(!carousel.is_animating());
        assert!(actions.iter().any(|a| matches!(a, Action::ScheduleAutoplay { .. })));
    }

    #[test]
    fn tap_does_not_guard_links_but_drag_does() {
        let (mut carousel, _) = carousel(3);
        carousel.on_touch_start(at(200.0, 300.0, 0.0), 1);
        carousel.on_touch_move(at(202.0, 301.0, 30.0), 1);
        carousel.on_touch_end(at(202.0, 301.0, 60.0));
        assert!(carousel.guard_link_click().is_empty());

        carousel.on_touch_start(at(200.0, 300.0, 100.0), 1);
        carousel.on_touch_move(at(180.0, 300.0, 130.0), 1);
        carousel.on_touch_end(at(180.0, 300.0, 160.0));
        assert_eq!(carousel.guard_link_click(), vec![Action::SuppressClick]);
    }
}
