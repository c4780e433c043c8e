//! Overlay markup renderer.
//!
//! Hosts that inject markup rather than building nodes can turn an
//! [`OverlayView`] into the HTML fragment placed inside the overlay's content
//! element. Every interpolated value is escaped.
//!
//! # Example
//!
//! ```rust
//! use showreel::domain::Project;
//! use showreel::ui::{build_overlay, render_overlay_html};
//!
//! let mut project = Project::new("Salt", "salt.jpg");
//! project.sound = Some("Ö & Co".to_string());
//! let html = render_overlay_html(&build_overlay(&project));
//! assert_eq!(html, "<p><strong>Sound:</strong> Ö &amp; Co</p>");
//! ```

use crate::ui::viewmodel::OverlayView;
use std::fmt::Write as _;

/// Renders the overlay content; empty for a hidden overlay.
#[must_use]
pub fn render_overlay_html(overlay: &OverlayView) -> String {
    if overlay.hidden {
        return String::new();
    }

    let mut html = String::new();

    for line in &overlay.lines {
        match &line.label {
            Some(label) => {
                let _ = write!(html, "<p><strong>{}:</strong> {}</p>", escape(label), escape(&line.value));
            }
            None => {
                let _ = write!(html, "<p><strong>{}</strong></p>", escape(&line.value));
            }
        }
    }

    if !overlay.links.is_empty() {
        html.push_str("<div class=\"overlay-icons\">");
        for link in &overlay.links {
            let _ = write!(
                html,
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener\" class=\"icon-link {}\"><i class=\"{}\"></i></a>",
                escape(&link.href),
                link.service.link_class(),
                link.service.icon_class(),
            );
        }
        html.push_str("</div>");
    }

    html
}

/// Escapes text for use in element content and double-quoted attributes.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
