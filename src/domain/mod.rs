//! Domain layer for showreel.
//!
//! Core types independent of any host (browser shim, headless host):
//!
//! - [`error`]: Error types and result alias
//! - [`project`]: Gallery project records
//! - [`section`]: Page sections and the static site layout
//!
//! # Examples
//!
//! ```
//! use showreel::domain::{Result, Section, SectionTag, SiteConfig};
//!
//! fn single_page() -> Result<SiteConfig> {
//!     Ok(SiteConfig {
//!         sections: vec![Section::tagged(SectionTag::Home)],
//!         projects: vec![],
//!     })
//! }
//! ```

pub mod error;
pub mod project;
pub mod section;

pub use error::{Result, ShowreelError};
pub use project::{Links, Project};
pub use section::{Section, SectionTag, SiteConfig};
