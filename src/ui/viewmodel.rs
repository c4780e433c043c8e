//! View models for the carousel.
//!
//! A [`CarouselView`] is everything the host needs to repaint the carousel at
//! one index: the three panel images, the current project's overlay and the
//! title display. It is computed by [`Carousel::view`](crate::app::Carousel::view)
//! and carries no logic of its own.
//!
//! # Example
//!
//! ```rust
//! use showreel::ui::viewmodel::OverlayView;
//!
//! let overlay = OverlayView::default();
//! assert!(overlay.hidden);
//! ```

use crate::app::actions::Slot;
use serde::{Deserialize, Serialize};

/// Complete carousel view at one index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselView {
    /// Logical index of the current project.
    pub index: usize,
    /// Prev, current and next panels, in that order.
    pub panels: Vec<PanelView>,
    /// Overlay of the current panel.
    pub overlay: OverlayView,
    /// Title display under the carousel.
    pub title: String,
    /// Secondary line under the title (the project's type, or empty).
    pub subtitle: String,
}

/// Image assignment for one panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelView {
    pub slot: Slot,
    pub project_index: usize,
    pub image_src: String,
}

/// Overlay content for the current project.
///
/// Only fields present on the project contribute; when nothing does, the
/// overlay is `hidden` rather than rendered empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayView {
    pub lines: Vec<OverlayLine>,
    pub links: Vec<IconLink>,
    pub hidden: bool,
}

impl Default for OverlayView {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            links: Vec::new(),
            hidden: true,
        }
    }
}

/// One metadata line, e.g. `Director: A. Maren`.
///
/// A line without a label is rendered emphasized on its own (the project type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayLine {
    pub label: Option<String>,
    pub value: String,
}

/// External service an icon link points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkService {
    Vimeo,
    Youtube,
    Imdb,
}

impl LinkService {
    /// Icon class used by the page's icon font.
    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Vimeo => "fa-brands fa-vimeo-v",
            Self::Youtube => "fa-brands fa-youtube",
            Self::Imdb => "fa-brands fa-imdb",
        }
    }

    /// Modifier class on the anchor.
    #[must_use]
    pub const fn link_class(self) -> &'static str {
        match self {
            Self::Vimeo | Self::Youtube => "vimeo",
            Self::Imdb => "imdb",
        }
    }
}

/// Icon link in the overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconLink {
    pub service: LinkService,
    pub href: String,
}
