//! Application state container.
//!
//! [`AppState`] owns the three controllers and the viewport. It is the single
//! source of truth for the page's interaction state; the event handler is the
//! only code that drives it.
//!
//! # State Components
//!
//! - **Pager**: active section and page transition lock
//! - **Carousel**: project index, slide lock, autoplay timer, drag tracking
//! - **Reveals**: play-once latches for the about/contact sequences
//! - **Viewport**: last known viewport size
//!
//! The carousel observes the pager through a read-only section handle wired
//! up here, at construction.
//!
//! # Example
//!
//! ```rust
//! use showreel::app::AppState;
//! use showreel::app::gesture::GestureThresholds;
//! use showreel::domain::SiteConfig;
//! use showreel::ui::MotionProfile;
//!
//! let state = AppState::new(SiteConfig::default(), &MotionProfile::default(), GestureThresholds::default());
//! assert_eq!(state.pager.current_index(), 0);
//! ```

use crate::app::actions::{Action, ImageHints};
use crate::app::carousel::Carousel;
use crate::app::gesture::GestureThresholds;
use crate::app::pager::Pager;
use crate::app::reveal::Reveals;
use crate::domain::SiteConfig;
use crate::ui::motion::MotionProfile;
use serde::{Deserialize, Serialize};

/// Viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Central interaction state.
#[derive(Debug)]
pub struct AppState {
    pub pager: Pager,
    pub carousel: Carousel,
    pub reveals: Reveals,
    pub viewport: Viewport,

    /// Whether the `Loaded` bootstrap has run.
    pub loaded: bool,
}

impl AppState {
    /// Builds the controllers for `site` with the given motion and gesture thresholds.
    #[must_use]
    pub fn new(site: SiteConfig, motion: &MotionProfile, thresholds: GestureThresholds) -> Self {
        let pager = Pager::new(&site.sections, motion.pager.clone(), thresholds);
        let carousel = Carousel::new(site.projects, pager.watch(), motion.carousel.clone(), thresholds);
        let reveals = Reveals::new(&site.sections, motion.reveal.clone());

        Self {
            pager,
            carousel,
            reveals,
            viewport: Viewport::default(),
            loaded: false,
        }
    }

    /// Records a new viewport size.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Viewport {
            width: width.max(0.0),
            height: height.max(0.0),
        };
    }

    /// Actions that put a freshly loaded page into its initial state.
    ///
    /// Runs once; later calls return nothing.
    pub fn bootstrap(&mut self) -> Vec<Action> {
        if std::mem::replace(&mut self.loaded, true) {
            return vec![];
        }

        self.pager.set_viewport_height(self.viewport.height);

        let mut actions = vec![
            Action::ApplyImageHints(ImageHints {
                lazy: true,
                async_decode: true,
            }),
            self.pager.snap(),
        ];
        if self.pager.section_count() > 0 {
            actions.push(self.pager.highlight());
        }
        actions.extend(self.carousel.render(self.carousel.index()));
        actions.extend(self.carousel.start_autoplay());

        tracing::debug!(
            sections = self.pager.section_count(),
            projects = self.carousel.len(),
            viewport_height = self.viewport.height,
            "page bootstrapped"
        );
        actions
    }

    /// Nav button states: exactly one `true`, at the current section.
    #[must_use]
    pub fn nav_highlight(&self) -> Vec<bool> {
        let current = self.pager.current_index();
        (0..self.pager.section_count()).map(|i| i == current).collect()
    }
}
