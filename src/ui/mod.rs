//! Presentation layer: view models, overlay content and motion settings.
//!
//! ```text
//! Carousel::view → CarouselView (+ OverlayView) → host / render_overlay_html
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Carousel view model types
//! - [`overlay`]: Overlay content from a project's optional fields
//! - [`renderer`]: Overlay HTML fragment renderer
//! - [`motion`]: Motion profiles (durations, easings, distances)

pub mod motion;
pub mod overlay;
pub mod renderer;
pub mod viewmodel;

pub use motion::MotionProfile;
pub use overlay::build_overlay;
pub use renderer::render_overlay_html;
pub use viewmodel::{CarouselView, IconLink, LinkService, OverlayLine, OverlayView, PanelView};
