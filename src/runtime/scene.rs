//! Recorded page state of the headless host.

use crate::app::actions::{ImageHints, Property, Slot, Target};
use crate::app::reveal::RevealKind;
use crate::ui::viewmodel::CarouselView;
use serde::Serialize;
use std::collections::BTreeMap;

/// Horizontal offsets of one carousel panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PanelStyle {
    pub x_px: f64,
    pub x_percent: f64,
}

impl PanelStyle {
    #[must_use]
    pub fn at_rest(&self) -> bool {
        self.x_px == 0.0 && self.x_percent == 0.0
    }
}

/// Visible state of one reveal element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementStyle {
    pub opacity: f64,
    pub y_px: f64,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self { opacity: 1.0, y_px: 0.0 }
    }
}

/// Everything the host has applied so far.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub page_offset_y: f64,
    /// Prev, current, next.
    pub panels: [PanelStyle; 3],
    pub wrapper_opacity: f64,
    pub nav: Vec<bool>,
    pub carousel: Option<CarouselView>,
    pub prefetched: Vec<String>,
    pub image_hints: Option<ImageHints>,
    /// Keyed `"<reveal>/<element>#<ordinal>"`.
    pub reveal_elements: BTreeMap<String, ElementStyle>,
    /// Reveal tweens started, per reveal kind.
    pub reveal_tweens: BTreeMap<String, usize>,
    pub suppressed_clicks: usize,
    /// Most autoplay timers ever scheduled at the same time.
    pub max_concurrent_timers: usize,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            page_offset_y: 0.0,
            panels: [PanelStyle::default(); 3],
            wrapper_opacity: 1.0,
            nav: Vec::new(),
            carousel: None,
            prefetched: Vec::new(),
            image_hints: None,
            reveal_elements: BTreeMap::new(),
            reveal_tweens: BTreeMap::new(),
            suppressed_clicks: 0,
            max_concurrent_timers: 0,
        }
    }
}

pub(crate) fn reveal_name(kind: RevealKind) -> &'static str {
    match kind {
        RevealKind::About => "about",
        RevealKind::Contact => "contact",
    }
}

impl Scene {
    /// Applies final property values to `target`.
    pub fn apply(&mut self, target: &Target, props: &[Property]) {
        for prop in props {
            match (target, *prop) {
                (Target::PageContainer, Property::TranslateY(y)) => self.page_offset_y = y,
                (Target::CarouselPanel { slot }, Property::TranslateX(x)) => self.panels[slot.position()].x_px = x,
                (Target::CarouselPanel { slot }, Property::TranslateXPercent(p)) => {
                    self.panels[slot.position()].x_percent = p;
                }
                (Target::CarouselWrapper, Property::Opacity(o)) => self.wrapper_opacity = o,
                (
                    Target::RevealElement {
                        reveal,
                        element,
                        ordinal,
                    },
                    prop,
                ) => {
                    let key = format!("{}/{element}#{ordinal}", reveal_name(*reveal));
                    let style = self.reveal_elements.entry(key).or_default();
                    match prop {
                        Property::Opacity(o) => style.opacity = o,
                        Property::TranslateY(y) => style.y_px = y,
                        Property::TranslateX(_) | Property::TranslateXPercent(_) => {}
                    }
                }
                (target, prop) => {
                    tracing::trace!(?target, ?prop, "property not tracked by headless scene");
                }
            }
        }
    }

    /// Index of the single active nav button, if exactly one is active.
    #[must_use]
    pub fn active_nav(&self) -> Option<usize> {
        let mut active = self.nav.iter().enumerate().filter(|(_, on)| **on).map(|(i, _)| i);
        match (active.next(), active.next()) {
            (Some(i), None) => Some(i),
            _ => None,
        }
    }

    /// Whether all three panels rest at zero offset.
    #[must_use]
    pub fn panels_at_rest(&self) -> bool {
        self.panels.iter().all(PanelStyle::at_rest)
    }

    /// Reveal tweens started for `kind`.
    #[must_use]
    pub fn reveal_tween_count(&self, kind: RevealKind) -> usize {
        self.reveal_tweens.get(reveal_name(kind)).copied().unwrap_or(0)
    }

    /// Current offset of the panel in `slot`.
    #[must_use]
    pub const fn panel(&self, slot: Slot) -> PanelStyle {
        self.panels[slot.position()]
    }
}
