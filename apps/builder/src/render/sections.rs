//! Section dispatch — maps a layout section identifier to how it is drawn.
//!
//! Each region has a closed set of kinds with bespoke markup. An identifier
//! present in `sections` but outside that set is drawn as its title alone;
//! an identifier found nowhere contributes nothing.

use serde_yaml::Value;

use crate::models::lenient;
use crate::models::profile::{Profile, SectionHeading};

/// Sidebar kinds with bespoke bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarKind {
    Education,
    Skills,
    FavoriteDishes,
    Interests,
}

impl SidebarKind {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "education" => Some(Self::Education),
            "skills" => Some(Self::Skills),
            "favorite_dishes" => Some(Self::FavoriteDishes),
            "interests" => Some(Self::Interests),
            _ => None,
        }
    }
}

/// Main-column kinds with bespoke bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainKind {
    Profile,
    Experience,
}

impl MainKind {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "profile" => Some(Self::Profile),
            "experience" => Some(Self::Experience),
            _ => None,
        }
    }
}

/// Resolved rendering plan for one identifier in one region.
#[derive(Debug, PartialEq)]
pub enum Dispatch<'a, K> {
    /// The region's built-in block drawn from `personal` (`contact`, `header`).
    Personal,
    /// A section with bespoke markup for this region.
    Bespoke(K, &'a Value),
    /// A section this region has no markup for: heading only.
    TitleOnly(&'a Value),
    /// Not a built-in and not in `sections`.
    Absent,
}

/// Resolves `id` for a region whose personal block is named `personal_id`.
///
/// The personal block wins over a same-named entry in `sections`.
pub fn resolve<'a, K>(
    id: &str,
    personal_id: &str,
    profile: &'a Profile,
    kind_of: fn(&str) -> Option<K>,
) -> Dispatch<'a, K> {
    if id == personal_id {
        return Dispatch::Personal;
    }
    match profile.section(id) {
        Some(section) => match kind_of(id) {
            Some(kind) => Dispatch::Bespoke(kind, section),
            None => Dispatch::TitleOnly(section),
        },
        None => Dispatch::Absent,
    }
}

/// `<h2>` carrying the section's uppercased title.
pub fn title_heading(section: &Value) -> String {
    let heading: SectionHeading = lenient::decode(section);
    format!("<h2>{}</h2>", heading.title.to_uppercase())
}
