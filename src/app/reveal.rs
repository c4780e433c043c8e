//! One-shot reveal sequences for the about and contact sections.
//!
//! Each sequence hides its elements, then fades and lifts them into place
//! with a staggered start. A latch guarantees the sequence runs at most once
//! per page lifetime, however often the section is revisited.

use crate::app::actions::{Action, Property, Target, Tween};
use crate::domain::{Section, SectionTag};
use crate::ui::motion::RevealMotion;
use serde::{Deserialize, Serialize};

/// Which section a reveal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealKind {
    About,
    Contact,
}

impl RevealKind {
    /// The reveal fired on arrival at a section tagged `tag`.
    #[must_use]
    pub const fn for_tag(tag: &SectionTag) -> Option<Self> {
        match tag {
            SectionTag::About => Some(Self::About),
            SectionTag::Contact => Some(Self::Contact),
            SectionTag::Home | SectionTag::Other(_) => None,
        }
    }

    /// Element roles in the order they appear.
    #[must_use]
    pub const fn roles(self) -> &'static [&'static str] {
        match self {
            Self::About => &["avatar", "heading", "paragraph"],
            Self::Contact => &["heading", "lead", "button"],
        }
    }
}

/// Play-once flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    played: bool,
}

impl RevealLatch {
    #[must_use]
    pub const fn played(&self) -> bool {
        self.played
    }

    /// Flips the latch; `true` only on the first call.
    pub fn claim(&mut self) -> bool {
        !std::mem::replace(&mut self.played, true)
    }
}

/// Both reveal sequences and their latches.
#[derive(Debug)]
pub struct Reveals {
    about: RevealLatch,
    contact: RevealLatch,
    about_elements: Vec<String>,
    contact_elements: Vec<String>,
    motion: RevealMotion,
}

impl Reveals {
    /// Collects the revealable elements present in the tagged sections.
    #[must_use]
    pub fn new(sections: &[Section], motion: RevealMotion) -> Self {
        let elements_of = |kind: RevealKind| {
            sections
                .iter()
                .find(|s| s.tag.as_ref().and_then(RevealKind::for_tag) == Some(kind))
                .map(|s| s.elements.clone())
                .unwrap_or_default()
        };

        Self {
            about: RevealLatch::default(),
            contact: RevealLatch::default(),
            about_elements: elements_of(RevealKind::About),
            contact_elements: elements_of(RevealKind::Contact),
            motion,
        }
    }

    #[must_use]
    pub const fn played(&self, kind: RevealKind) -> bool {
        match kind {
            RevealKind::About => self.about.played(),
            RevealKind::Contact => self.contact.played(),
        }
    }

    /// Runs the sequence for `kind` if it has not run yet.
    pub fn fire(&mut self, kind: RevealKind) -> Vec<Action> {
        let (latch, elements) = match kind {
            RevealKind::About => (&mut self.about, &self.about_elements),
            RevealKind::Contact => (&mut self.contact, &self.contact_elements),
        };
        if !latch.claim() {
            tracing::trace!(?kind, "reveal already played");
            return vec![];
        }

        let targets = ordered_targets(kind, elements);
        tracing::debug!(?kind, elements = targets.len(), "reveal sequence started");

        let mut actions = Vec::with_capacity(targets.len() * 2);
        for (position, target) in targets.into_iter().enumerate() {
            let delay = u32::try_from(position).unwrap_or(u32::MAX).saturating_mul(self.motion.stagger_ms);

            actions.push(Action::SetStyle {
                target: target.clone(),
                props: vec![Property::Opacity(0.0), Property::TranslateY(self.motion.offset_px)],
            });
            actions.push(Action::Animate(Tween {
                target,
                to: vec![Property::Opacity(1.0), Property::TranslateY(0.0)],
                duration_ms: self.motion.duration_ms,
                delay_ms: delay,
                easing: self.motion.easing.clone(),
                ticket: None,
            }));
        }
        actions
    }
}

/// Present elements in role order, numbering repeats of the same role.
/// Names outside the sequence's roles are skipped.
fn ordered_targets(kind: RevealKind, elements: &[String]) -> Vec<Target> {
    kind.roles()
        .iter()
        .flat_map(|role| {
            elements
                .iter()
                .filter(move |name| name.as_str() == *role)
                .enumerate()
                .map(move |(ordinal, name)| Target::RevealElement {
                    reveal: kind,
                    element: name.clone(),
                    ordinal,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MotionProfile;

    fn reveals(about: &[&str], contact: &[&str]) -> Reveals {
        let sections = vec![
            Section::tagged(SectionTag::Home),
            Section::tagged(SectionTag::About).with_elements(about.iter().copied()),
            Section::tagged(SectionTag::Contact).with_elements(contact.iter().copied()),
        ];
        Reveals::new(&sections, MotionProfile::default().reveal)
    }

    fn delays(actions: &[Action]) -> Vec<u32> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::Animate(t) => Some(t.delay_ms),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn latch_claims_once() {
        let mut latch = RevealLatch::default();
        assert!(latch.claim());
        assert!(!latch.claim());
        assert!(latch.played());
    }

    #[test]
    fn about_staggers_in_role_order() {
        let mut reveals = reveals(&["paragraph", "heading", "avatar", "paragraph"], &[]);
        let actions = reveals.fire(RevealKind::About);
        assert_eq!(delays(&actions), vec![0, 150, 300, 450]);

        let Action::SetStyle { target, .. } = &actions[0] else {
            panic!("expected hidden initial state");
        };
        assert_eq!(
            *target,
            Target::RevealElement {
                reveal: RevealKind::About,
                element: "avatar".to_string(),
                ordinal: 0,
            }
        );
    }

    #[test]
    fn missing_elements_are_skipped_without_gaps() {
        let mut reveals = reveals(&[], &["heading", "button"]);
        let actions = reveals.fire(RevealKind::Contact);
        assert_eq!(delays(&actions), vec![0, 150]);
    }

    #[test]
    fn second_fire_is_a_no_op() {
        let mut reveals = reveals(&["heading"], &["heading"]);
        assert!(!reveals.fire(RevealKind::About).is_empty());
        assert!(reveals.fire(RevealKind::About).is_empty());
        assert!(reveals.played(RevealKind::About));
        assert!(!reveals.played(RevealKind::Contact));
    }

    #[test]
    fn sequence_without_elements_still_latches() {
        let mut reveals = reveals(&[], &[]);
        assert!(reveals.fire(RevealKind::About).is_empty());
        assert!(reveals.played(RevealKind::About));
    }

    #[test]
    fn only_about_and_contact_have_reveals() {
        assert_eq!(RevealKind::for_tag(&SectionTag::Contact), Some(RevealKind::Contact));
        assert_eq!(RevealKind::for_tag(&SectionTag::Home), None);
        assert_eq!(RevealKind::for_tag(&SectionTag::Other("work".to_string())), None);
    }
}
