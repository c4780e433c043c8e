//! Overlay content derived from a project's optional fields.

use crate::domain::project::present;
use crate::domain::Project;
use crate::ui::viewmodel::{IconLink, LinkService, OverlayLine, OverlayView};

/// Builds the overlay for `project`.
///
/// Lines appear in a fixed order (type, director, DOP, sound), followed by
/// icon links (Vimeo, YouTube, IMDb). Absent or blank fields contribute
/// nothing. The overlay is hidden when no line and no link remains.
///
/// # Example
///
/// ```rust
/// use showreel::domain::Project;
/// use showreel::ui::overlay::build_overlay;
///
/// let mut project = Project::new("Night Swim", "night-swim.jpg");
/// assert!(build_overlay(&project).hidden);
///
/// project.director = Some("A. Maren".to_string());
/// let overlay = build_overlay(&project);
/// assert_eq!(overlay.lines[0].value, "A. Maren");
/// assert!(!overlay.hidden);
/// ```
#[must_use]
pub fn build_overlay(project: &Project) -> OverlayView {
    let mut lines = Vec::new();

    if let Some(kind) = present(&project.kind) {
        lines.push(OverlayLine {
            label: None,
            value: kind.to_string(),
        });
    }

    let credits = [
        ("Director", &project.director),
        ("DOP", &project.dop),
        ("Sound", &project.sound),
    ];
    lines.extend(credits.into_iter().filter_map(|(label, field)| {
        present(field).map(|value| OverlayLine {
            label: Some(label.to_string()),
            value: value.to_string(),
        })
    }));

    let links: Vec<IconLink> = [
        (LinkService::Vimeo, &project.links.vimeo),
        (LinkService::Youtube, &project.links.youtube),
        (LinkService::Imdb, &project.links.imdb),
    ]
    .into_iter()
    .filter_map(|(service, href)| {
        present(href).map(|href| IconLink {
            service,
            href: href.to_string(),
        })
    })
    .collect();

    let hidden = lines.is_empty() && links.is_empty();
    OverlayView { lines, links, hidden }
}
