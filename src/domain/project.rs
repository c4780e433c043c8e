//! Project domain model.
//!
//! A `Project` is one entry of the portfolio gallery shown by the carousel:
//! a film or video credit with optional crew names and external links. The
//! gallery is static page configuration, so projects are immutable once loaded.

use serde::{Deserialize, Serialize};

/// External links attached to a project.
///
/// Every link is optional; the overlay only shows icons for links that are
/// present and non-blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub imdb: Option<String>,
    #[serde(default)]
    pub vimeo: Option<String>,
}

impl Links {
    /// Returns `true` if no link is usable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        present(&self.youtube).is_none() && present(&self.imdb).is_none() && present(&self.vimeo).is_none()
    }
}

/// A portfolio project displayed in the carousel.
///
/// # Fields
///
/// - `title`: Display title shown under the carousel
/// - `kind`: Role or production type (`type` in page data), e.g. "Short film"
/// - `director`, `dop`, `sound`: Optional crew credits
/// - `links`: Optional external links
/// - `image_src`: Poster image for the panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub dop: Option<String>,
    #[serde(default)]
    pub sound: Option<String>,
    #[serde(default)]
    pub links: Links,
    pub image_src: String,
}

impl Project {
    /// Creates a project with only a title and image; every other field is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use showreel::domain::Project;
    ///
    /// let project = Project::new("Night Swim", "img/night-swim.jpg");
    /// assert!(project.director.is_none());
    /// assert!(project.links.is_empty());
    /// ```
    #[must_use]
    pub fn new(title: impl Into<String>, image_src: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: None,
            director: None,
            dop: None,
            sound: None,
            links: Links::default(),
            image_src: image_src.into(),
        }
    }
}

/// Returns the trimmed value of an optional field if it carries any text.
///
/// Page data often encodes a missing credit as an empty attribute, so blank
/// strings count as absent.
#[must_use]
pub fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
