//! Showreel: interaction core for a single-page portfolio site.
//!
//! Showreel drives the three moving parts of a one-page showreel site:
//! - A full-viewport section pager (wheel, nav buttons, vertical swipes)
//! - A three-up project carousel with autoplay, arrows, hover pause and
//!   horizontal drag, plus a per-project info overlay
//! - One-shot reveal sequences for the About and Contact sections
//!
//! The library never touches a page directly. Hosts feed it events and apply
//! the actions it returns; a headless host ships in [`runtime`] for tests,
//! replays and the `showreel` CLI.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs)                                      │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Runtime (runtime/)                                 │  ← Headless host
//! │  - Virtual clock, tween and timer scheduling        │
//! │  - Replay scripts                                   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machines
//! │  - Event handling                                   │
//! │  - Pager, carousel, reveals                         │
//! │  - Gesture classification                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌───────────────────────┐          ┌───────────────────────┐
//! │ UI Layer (ui/)        │          │ Domain (domain/)      │
//! │ - View models         │          │ - Projects, sections  │
//! │ - Overlay + HTML      │          │ - Site config loading │
//! │ - Motion profiles     │          │ - Error types         │
//! └───────────────────────┘          └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber with env filter               │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Event/action state machines
//! - [`domain`]: Projects, sections, site configuration, errors
//! - [`ui`]: View models, overlay rendering, motion profiles
//! - [`runtime`]: Headless host and replay scripts
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! Runtime settings come from a flat key/value map or a TOML file:
//!
//! ```toml
//! motion = "reduced"
//! trace_level = "debug"
//!
//! [gestures]
//! drag_commit_px = 40.0
//! ```
//!
//! # Example
//!
//! ```rust
//! use showreel::{handle_event, initialize, Config, Event};
//! use showreel::domain::{Project, Section, SectionTag, SiteConfig};
//!
//! let site = SiteConfig {
//!     sections: vec![Section::tagged(SectionTag::Home), Section::tagged(SectionTag::About)],
//!     projects: vec![Project::new("Salt", "salt.jpg"), Project::new("Ash", "ash.jpg")],
//! };
//! let mut state = initialize(&Config::default(), site);
//!
//! handle_event(&mut state, &Event::Loaded { width: 1280.0, height: 800.0 })?;
//! let actions = handle_event(&mut state, &Event::NavClick { index: 1 })?;
//! assert!(state.pager.is_animating());
//! assert!(!actions.is_empty());
//! # Ok::<(), showreel::ShowreelError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod observability;
pub mod runtime;
pub mod ui;

pub use app::gesture::GestureThresholds;
pub use app::{handle_event, Action, AppState, Direction, Event};
pub use domain::{Result, ShowreelError, SiteConfig};
pub use runtime::{HeadlessHost, ReplayScript};
pub use ui::MotionProfile;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Runtime configuration.
///
/// # Example
///
/// ```rust
/// use showreel::Config;
///
/// let config = Config::from_toml_str("motion = \"reduced\"\n")?;
/// assert_eq!(config.motion_name.as_deref(), Some("reduced"));
/// # Ok::<(), showreel::ShowreelError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Built-in motion profile: `standard` or `reduced`. Ignored if
    /// `motion_file` is set.
    #[serde(rename = "motion")]
    pub motion_name: Option<String>,

    /// Path to a custom TOML motion profile. See [`ui::motion`] for the format.
    pub motion_file: Option<String>,

    /// Tracing filter directive, e.g. `debug` or `showreel=trace`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Gesture thresholds; unset fields keep their defaults.
    pub gestures: GestureThresholds,
}

impl Config {
    /// Parses configuration from a flat string map.
    ///
    /// Recognised keys are `motion`, `motion_file`, `trace_level` and every
    /// [`GestureThresholds`] field by name. Threshold values that do not parse
    /// as numbers keep their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use showreel::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("motion".to_string(), "reduced".to_string());
    /// map.insert("drag_commit_px".to_string(), "40".to_string());
    /// map.insert("swipe_min_distance_px".to_string(), "far".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.motion_name.as_deref(), Some("reduced"));
    /// assert_eq!(config.gestures.drag_commit_px, 40.0);
    /// assert_eq!(config.gestures.swipe_min_distance_px, 50.0);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let mut gestures = GestureThresholds::default();
        {
            let fields: [(&str, &mut f64); 9] = [
                ("swipe_max_duration_ms", &mut gestures.swipe_max_duration_ms),
                ("swipe_horizontal_cancel_px", &mut gestures.swipe_horizontal_cancel_px),
                ("swipe_min_distance_px", &mut gestures.swipe_min_distance_px),
                ("drag_vertical_cancel_px", &mut gestures.drag_vertical_cancel_px),
                ("drag_max_duration_ms", &mut gestures.drag_max_duration_ms),
                ("drag_commit_px", &mut gestures.drag_commit_px),
                ("drag_threshold_px", &mut gestures.drag_threshold_px),
                ("drag_damping_current", &mut gestures.drag_damping_current),
                ("drag_damping_neighbor", &mut gestures.drag_damping_neighbor),
            ];
            for (key, slot) in fields {
                if let Some(value) = config.get(key).and_then(|s| s.trim().parse::<f64>().ok()) {
                    *slot = value;
                }
            }
        }

        Self {
            motion_name: config.get("motion").cloned(),
            motion_file: config.get("motion_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
            gestures,
        }
    }

    /// Parses configuration from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ShowreelError::Config`] if the TOML is malformed or a field
    /// has the wrong type.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ShowreelError::Config(format!("Failed to parse config TOML: {e}")))
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or
    /// [`ShowreelError::Config`] if it does not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Resolves the motion profile: file first, then built-in name, then
    /// `standard`. Failures fall back to the default with a debug log.
    #[must_use]
    pub fn motion(&self) -> MotionProfile {
        self.motion_file.as_ref().map_or_else(
            || {
                self.motion_name.as_ref().map_or_else(MotionProfile::default, |name| {
                    MotionProfile::from_name(name).unwrap_or_else(|| {
                        tracing::debug!(motion = %name, "unknown motion profile, using default");
                        MotionProfile::default()
                    })
                })
            },
            |file| {
                MotionProfile::from_file(file).unwrap_or_else(|e| {
                    tracing::debug!(motion_file = %file, error = %e, "failed to load motion profile, using default");
                    MotionProfile::default()
                })
            },
        )
    }
}

/// Builds the interaction state for `site` under `config`.
///
/// The returned state is idle; deliver [`Event::Loaded`] to bootstrap it.
#[must_use]
pub fn initialize(config: &Config, site: SiteConfig) -> AppState {
    let motion = config.motion();
    tracing::debug!(
        motion = %motion.name,
        sections = site.sections.len(),
        projects = site.projects.len(),
        "initializing showreel"
    );
    AppState::new(site, &motion, config.gestures)
}
