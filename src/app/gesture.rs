//! Touch gesture samples and threshold classification.
//!
//! The same finger movement is read two ways: the pager looks for a fast,
//! mostly vertical swipe; the carousel looks for a horizontal drag. Large
//! displacement on the other axis cancels each classification, which is what
//! keeps the two from firing on one gesture.

use crate::app::modes::Direction;
use serde::{Deserialize, Serialize};

/// A single touch position with its event timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
    pub time_ms: f64,
}

/// Start of a gesture, captured at touch start and discarded at touch end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub start_x: f64,
    pub start_y: f64,
    pub start_time: f64,
}

impl From<TouchPoint> for GestureSample {
    fn from(point: TouchPoint) -> Self {
        Self {
            start_x: point.x,
            start_y: point.y,
            start_time: point.time_ms,
        }
    }
}

impl GestureSample {
    /// Displacement and elapsed time from the start of the gesture to `point`.
    #[must_use]
    pub fn displacement_to(&self, point: TouchPoint) -> Displacement {
        Displacement {
            dx: point.x - self.start_x,
            dy: point.y - self.start_y,
            elapsed_ms: (point.time_ms - self.start_time).max(0.0),
        }
    }
}

/// Signed movement of a gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Displacement {
    pub dx: f64,
    pub dy: f64,
    pub elapsed_ms: f64,
}

/// Distance and timing thresholds for gesture classification, in pixels and
/// milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureThresholds {
    /// Longest touch that still counts as a page swipe.
    pub swipe_max_duration_ms: f64,
    /// Horizontal movement above which a touch is not a page swipe.
    pub swipe_horizontal_cancel_px: f64,
    /// Vertical movement a page swipe must reach.
    pub swipe_min_distance_px: f64,

    /// Vertical movement above which the carousel cedes the gesture to the pager.
    pub drag_vertical_cancel_px: f64,
    /// Longest touch that still commits a carousel step.
    pub drag_max_duration_ms: f64,
    /// Horizontal movement a carousel drag must reach to commit.
    pub drag_commit_px: f64,
    /// Movement on either axis after which a touch is a drag rather than a tap.
    pub drag_threshold_px: f64,

    /// Fraction of the finger movement applied to the current panel while dragging.
    pub drag_damping_current: f64,
    /// Fraction of the finger movement applied to the neighbouring panels.
    pub drag_damping_neighbor: f64,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            swipe_max_duration_ms: 700.0,
            swipe_horizontal_cancel_px: 60.0,
            swipe_min_distance_px: 50.0,
            drag_vertical_cancel_px: 30.0,
            drag_max_duration_ms: 600.0,
            drag_commit_px: 50.0,
            drag_threshold_px: 8.0,
            drag_damping_current: 0.35,
            drag_damping_neighbor: 0.2,
        }
    }
}

impl GestureThresholds {
    /// Classifies a finished touch as a page swipe.
    ///
    /// Finger moving up (negative `dy`) goes to the next section.
    #[must_use]
    pub fn page_swipe(&self, d: Displacement) -> Option<Direction> {
        if d.elapsed_ms > self.swipe_max_duration_ms
            || d.dx.abs() > self.swipe_horizontal_cancel_px
            || d.dy.abs() < self.swipe_min_distance_px
        {
            return None;
        }
        Some(if d.dy < 0.0 { Direction::Next } else { Direction::Previous })
    }

    /// Whether vertical movement hands the gesture over to the pager.
    #[must_use]
    pub fn cedes_to_pager(&self, d: Displacement) -> bool {
        d.dy.abs() > self.drag_vertical_cancel_px
    }

    /// Whether the touch has moved far enough to count as a drag.
    #[must_use]
    pub fn is_drag(&self, d: Displacement) -> bool {
        d.dx.abs() > self.drag_threshold_px || d.dy.abs() > self.drag_threshold_px
    }

    /// Classifies a finished touch as a carousel step.
    ///
    /// Dragging left (negative `dx`) shows the next project.
    #[must_use]
    pub fn carousel_step(&self, d: Displacement) -> Option<Direction> {
        if self.cedes_to_pager(d) || d.elapsed_ms > self.drag_max_duration_ms || d.dx.abs() < self.drag_commit_px {
            return None;
        }
        Some(if d.dx < 0.0 { Direction::Next } else { Direction::Previous })
    }
}
