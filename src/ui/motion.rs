//! Motion profiles: durations, easings and distances for every animation.
//!
//! Profiles are TOML. Two are built in:
//!
//! - `standard`: the site's regular motion (default)
//! - `reduced`: short, linear, no dip or stagger, for `prefers-reduced-motion`
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-motion"
//!
//! [pager]
//! duration_ms = 900
//! easing = "power3.inOut"
//!
//! [carousel]
//! duration_ms = 600
//! easing = "power2.inOut"
//! shift_percent = 33.333
//! dip_opacity = 0.6
//! snap_back_ms = 250
//! snap_back_easing = "power2.out"
//! autoplay_interval_ms = 4500
//!
//! [reveal]
//! duration_ms = 800
//! easing = "power3.out"
//! stagger_ms = 150
//! offset_px = 30.0
//! ```

use crate::domain::{Result, ShowreelError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete motion configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MotionProfile {
    pub name: String,
    pub pager: PagerMotion,
    pub carousel: CarouselMotion,
    pub reveal: RevealMotion,
}

/// Section-to-section transition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PagerMotion {
    pub duration_ms: u32,
    pub easing: String,
}

/// Carousel step, snap-back and autoplay timing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CarouselMotion {
    pub duration_ms: u32,
    pub easing: String,
    /// Horizontal shift of every panel per step, as a percentage of panel width.
    pub shift_percent: f64,
    /// Wrapper opacity at the bottom of the dip during a step.
    pub dip_opacity: f64,
    pub snap_back_ms: u32,
    pub snap_back_easing: String,
    pub autoplay_interval_ms: u32,
}

/// Reveal one-shot timing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RevealMotion {
    pub duration_ms: u32,
    pub easing: String,
    /// Start delay between consecutive elements.
    pub stagger_ms: u32,
    /// Initial downward offset of hidden elements.
    pub offset_px: f64,
}

impl MotionProfile {
    /// Loads a built-in profile by name (`standard` or `reduced`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use showreel::ui::MotionProfile;
    ///
    /// let motion = MotionProfile::from_name("reduced").unwrap();
    /// assert_eq!(motion.reveal.stagger_ms, 0);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "standard" => include_str!("../../profiles/standard.toml"),
            "reduced" => include_str!("../../profiles/reduced.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a profile from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML does not
    /// describe a complete profile.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        let profile: Self =
            toml::from_str(&contents).map_err(|e| ShowreelError::Motion(format!("Failed to parse motion TOML: {e}")))?;
        profile.validate()?;
        Ok(profile)
    }

    /// Rejects settings the runtime cannot honour.
    ///
    /// # Errors
    ///
    /// Returns [`ShowreelError::Motion`] if the autoplay interval is zero.
    pub fn validate(&self) -> Result<()> {
        if self.carousel.autoplay_interval_ms == 0 {
            return Err(ShowreelError::Motion(format!(
                "Motion profile '{}': carousel.autoplay_interval_ms must be at least 1",
                self.name
            )));
        }
        Ok(())
    }
}

impl CarouselMotion {
    /// Length of the fade-down leg of the opacity dip: half the step, rounded
    /// down. The recovery leg takes the rest of the step.
    #[must_use]
    pub const fn dip_leg_ms(&self) -> u32 {
        self.duration_ms / 2
    }
}

impl Default for MotionProfile {
    /// Returns the `standard` profile.
    ///
    /// # Panics
    ///
    /// Panics if the built-in profile fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("standard").expect("Built-in standard motion profile should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_profiles_parse() {
        let standard = MotionProfile::default();
        assert_eq!(standard.name, "standard");
        assert_eq!(standard.pager.duration_ms, 900);
        assert_eq!(standard.pager.easing, "power3.inOut");
        assert_eq!(standard.carousel.autoplay_interval_ms, 4500);
        assert_eq!(standard.carousel.dip_leg_ms(), 300);

        let reduced = MotionProfile::from_name("reduced").unwrap();
        assert!((reduced.carousel.dip_opacity - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_profile_name_is_none() {
        assert!(MotionProfile::from_name("bouncy").is_none());
    }

    #[test]
    fn incomplete_profile_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("motion.toml");
        std::fs::write(&path, "name = \"half\"\n[pager]\nduration_ms = 100\neasing = \"none\"\n").unwrap();

        let err = MotionProfile::from_file(&path).unwrap_err();
        assert!(matches!(err, ShowreelError::Motion(_)));
    }

    #[test]
    fn zero_autoplay_interval_is_rejected() {
        let mut profile = MotionProfile::default();
        profile.carousel.autoplay_interval_ms = 0;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("motion.toml");
        std::fs::write(&path, toml::to_string(&profile).unwrap()).unwrap();

        let err = MotionProfile::from_file(&path).unwrap_err();
        assert!(matches!(err, ShowreelError::Motion(ref msg) if msg.contains("autoplay_interval_ms")));
        assert!(MotionProfile::default().validate().is_ok());
    }
}
