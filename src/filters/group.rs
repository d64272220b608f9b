//! Filter groups and their checkbox identifiers.

use std::fmt;

/// One of the three independent checkbox sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterGroup {
    State,
    City,
    Amenity,
}

impl FilterGroup {
    /// Resolve a checkbox identifier. Unknown identifiers map to `None`.
    pub fn from_checkbox_id(id: &str) -> Option<Self> {
        match id {
            "state_filter" => Some(Self::State),
            "city_filter" => Some(Self::City),
            "amenity_filter" => Some(Self::Amenity),
            _ => None,
        }
    }

    /// The checkbox identifier rendered into the page.
    pub fn checkbox_id(self) -> &'static str {
        match self {
            Self::State => "state_filter",
            Self::City => "city_filter",
            Self::Amenity => "amenity_filter",
        }
    }
}

impl fmt::Display for FilterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.checkbox_id())
    }
}
