//! Page sections and the site layout.
//!
//! The page is a fixed stack of full-viewport sections. Each section may carry a
//! semantic tag and lists the revealable elements that exist in this page variant.

use super::error::{Result, ShowreelError};
use super::project::Project;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Semantic tag of a section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionTag {
    Home,
    About,
    Contact,
    Other(String),
}

impl From<String> for SectionTag {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "home" => Self::Home,
            "about" => Self::About,
            "contact" => Self::Contact,
            _ => Self::Other(value),
        }
    }
}

impl From<SectionTag> for String {
    fn from(tag: SectionTag) -> Self {
        match tag {
            SectionTag::Home => "home".to_string(),
            SectionTag::About => "about".to_string(),
            SectionTag::Contact => "contact".to_string(),
            SectionTag::Other(name) => name,
        }
    }
}

/// One full-viewport panel of the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub tag: Option<SectionTag>,

    /// Names of revealable elements present in the markup, in document order
    /// (e.g. `["avatar", "heading", "paragraph", "paragraph"]`).
    #[serde(default)]
    pub elements: Vec<String>,
}

impl Section {
    #[must_use]
    pub fn tagged(tag: SectionTag) -> Self {
        Self {
            tag: Some(tag),
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_elements<I, S>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.elements = elements.into_iter().map(Into::into).collect();
        self
    }
}

/// Static page data: the section stack and the project gallery.
///
/// Loaded once at startup from TOML or from a JSON blob embedded in the page.
///
/// ```toml
/// [[sections]]
/// tag = "home"
///
/// [[sections]]
/// tag = "about"
/// elements = ["avatar", "heading", "paragraph", "paragraph"]
///
/// [[projects]]
/// title = "Night Swim"
/// type = "Short film"
/// director = "A. Maren"
/// image_src = "img/night-swim.jpg"
///
/// [projects.links]
/// imdb = "https://www.imdb.com/title/tt0000001/"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl SiteConfig {
    /// Parses site data from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ShowreelError::Gallery`] if the TOML is malformed or a field has
    /// the wrong type.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ShowreelError::Gallery(format!("Failed to parse site TOML: {e}")))
    }

    /// Parses site data from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ShowreelError::Gallery`] if the JSON is malformed.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).map_err(|e| ShowreelError::Gallery(format!("Failed to parse site JSON: {e}")))
    }

    /// Loads site data from a file, choosing the format by extension
    /// (`.json` is JSON, anything else is TOML).
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a gallery error if it
    /// cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let site = if is_json {
            Self::from_json_str(&contents)?
        } else {
            Self::from_toml_str(&contents)?
        };

        tracing::debug!(
            path = %path.display(),
            sections = site.sections.len(),
            projects = site.projects.len(),
            "site config loaded"
        );
        Ok(site)
    }

    /// Index of the first section carrying `tag`, if any.
    #[must_use]
    pub fn section_index(&self, tag: &SectionTag) -> Option<usize> {
        self.sections.iter().position(|s| s.tag.as_ref() == Some(tag))
    }
}
