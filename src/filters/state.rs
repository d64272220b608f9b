//! Checked filter selections.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::filters::FilterGroup;
use crate::page::Element;

/// A checkbox change event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxChange {
    /// The checkbox `id` attribute (`state_filter`, `city_filter`, ...).
    pub group_id: String,
    /// The `data-name` attribute.
    pub name: String,
    /// The `data-id` attribute.
    pub id: String,
    /// Whether the checkbox is now checked.
    pub checked: bool,
}

impl CheckboxChange {
    pub fn new(group_id: impl Into<String>, name: impl Into<String>, id: impl Into<String>, checked: bool) -> Self {
        Self {
            group_id: group_id.into(),
            name: name.into(),
            id: id.into(),
            checked,
        }
    }
}

/// New text for one of the filter headings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingUpdate {
    pub target: Element,
    pub text: String,
}

/// Body of a places search request.
///
/// Empty groups are omitted, so no selection serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cities: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
}

impl SearchRequest {
    pub fn is_empty(&self) -> bool {
        self.states.is_empty() && self.cities.is_empty() && self.amenities.is_empty()
    }
}

/// The three name → id mappings of checked filters.
///
/// Keys are exactly the labels currently checked in each group.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    amenities: BTreeMap<String, String>,
    cities: BTreeMap<String, String>,
    states: BTreeMap<String, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a checkbox change and return the heading it affects.
    ///
    /// A change with an unrecognized group identifier updates nothing and
    /// returns `None`.
    pub fn apply(&mut self, change: &CheckboxChange) -> Option<HeadingUpdate> {
        let Some(group) = FilterGroup::from_checkbox_id(&change.group_id) else {
            tracing::debug!(group_id = %change.group_id, "Ignoring change from unknown filter group");
            return None;
        };

        let selection = self.selection_mut(group);
        if change.checked {
            selection.insert(change.name.clone(), change.id.clone());
        } else {
            selection.remove(&change.name);
        }

        tracing::debug!(
            group = %group,
            name = %change.name,
            checked = change.checked,
            "Filter selection changed"
        );

        Some(match group {
            FilterGroup::Amenity => HeadingUpdate {
                target: Element::AmenitiesHeading,
                text: self.amenities_summary(),
            },
            FilterGroup::State | FilterGroup::City => HeadingUpdate {
                target: Element::LocationsHeading,
                text: self.locations_summary(),
            },
        })
    }

    /// Sorted, comma-joined amenity names.
    pub fn amenities_summary(&self) -> String {
        join_names(self.amenities.keys())
    }

    /// Sorted, comma-joined union of state and city names.
    pub fn locations_summary(&self) -> String {
        join_names(self.states.keys().chain(self.cities.keys()))
    }

    /// Checked name → id pairs of a group, ordered by key bytes.
    pub fn selected(&self, group: FilterGroup) -> &BTreeMap<String, String> {
        match group {
            FilterGroup::State => &self.states,
            FilterGroup::City => &self.cities,
            FilterGroup::Amenity => &self.amenities,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty() && self.cities.is_empty() && self.amenities.is_empty()
    }

    /// Identifiers of the checked filters, per group.
    pub fn search_request(&self) -> SearchRequest {
        SearchRequest {
            states: self.states.values().cloned().collect(),
            cities: self.cities.values().cloned().collect(),
            amenities: self.amenities.values().cloned().collect(),
        }
    }

    fn selection_mut(&mut self, group: FilterGroup) -> &mut BTreeMap<String, String> {
        match group {
            FilterGroup::State => &mut self.states,
            FilterGroup::City => &mut self.cities,
            FilterGroup::Amenity => &mut self.amenities,
        }
    }
}

/// Sort by UTF-16 code units (the browser's default string order), drop
/// duplicates, join with `", "`.
fn join_names<'a>(names: impl Iterator<Item = &'a String>) -> String {
    let mut names: Vec<&str> = names.map(String::as_str).collect();
    names.sort_by(|a, b| a.encode_utf16().cmp(b.encode_utf16()));
    names.dedup();
    names.join(", ")
}
