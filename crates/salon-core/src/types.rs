//! Service catalog.
//!
//! ## Summary
//! A salon offers a fixed set of service categories. Each category is its own
//! booking partition: appointments in different categories never collide.
//! Categories carry a list of sub-services which are only descriptive and are
//! recorded in an appointment's notes.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Service partition scoping occupancy and overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    Hair,
    Nails,
    Waxing,
}

impl ServiceCategory {
    pub const ALL: [Self; 3] = [Self::Hair, Self::Nails, Self::Waxing];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hair => "hair",
            Self::Nails => "nails",
            Self::Waxing => "waxing",
        }
    }

    #[must_use]
    pub const fn sub_services(self) -> &'static [SubService] {
        match self {
            Self::Hair => HAIR_SERVICES,
            Self::Nails => NAIL_SERVICES,
            Self::Waxing => WAXING_SERVICES,
        }
    }

    /// Looks up a sub-service of this category by id.
    #[must_use]
    pub fn sub_service(self, id: &str) -> Option<&'static SubService> {
        self.sub_services().iter().find(|s| s.id == id)
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ServiceCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::ParseError(format!("unknown service category: {s}")))
    }
}

/// A named service within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubService {
    pub id: &'static str,
    pub label: &'static str,
}

const HAIR_SERVICES: &[SubService] = &[
    SubService { id: "haircut_female", label: "Women's haircut" },
    SubService { id: "haircut_male", label: "Men's haircut" },
    SubService { id: "blowdry", label: "Blow-dry" },
    SubService { id: "hairstyle", label: "Hairstyle" },
    SubService { id: "toner", label: "Toner" },
    SubService { id: "coloring", label: "Coloring" },
    SubService { id: "highlights", label: "Highlights" },
    SubService { id: "braids", label: "Braids" },
];

const NAIL_SERVICES: &[SubService] = &[
    SubService { id: "gel_natural", label: "Gel on natural nails" },
    SubService { id: "extensions", label: "Extensions" },
];

const WAXING_SERVICES: &[SubService] = &[
    SubService { id: "eyebrows", label: "Eyebrows" },
    SubService { id: "face", label: "Face" },
    SubService { id: "intimate", label: "Intimate" },
    SubService { id: "legs", label: "Legs" },
    SubService { id: "arms", label: "Arms" },
    SubService { id: "underarms", label: "Underarms" },
    SubService { id: "back", label: "Back" },
];

/// ## Summary
/// Records a sub-service in free-text notes as a `[label] ` prefix.
///
/// Notes already mentioning the label are returned unchanged, so re-saving an
/// edited appointment does not stack prefixes. Unknown ids leave the notes as-is.
#[must_use]
pub fn compose_notes(category: ServiceCategory, sub_service_id: Option<&str>, notes: &str) -> String {
    let Some(sub) = sub_service_id.and_then(|id| category.sub_service(id)) else {
        return notes.to_string();
    };
    if notes.contains(sub.label) {
        return notes.to_string();
    }
    format!("[{}] {notes}", sub.label)
}
