//! Filter checkbox lists.
//!
//! Each list item carries the group's checkbox id plus `data-id` and
//! `data-name`, which is what checkbox change events report back.

use crate::api::{Amenity, City, State};
use crate::filters::FilterGroup;
use crate::render::html_escape;

/// Sorted states, each followed by a nested list of its sorted cities.
pub fn location_items(states: &[(State, Vec<City>)]) -> Vec<String> {
    let mut states: Vec<&(State, Vec<City>)> = states.iter().collect();
    states.sort_by(|a, b| a.0.name.cmp(&b.0.name));

    states
        .into_iter()
        .map(|(state, cities)| {
            let mut cities: Vec<&City> = cities.iter().collect();
            cities.sort_by(|a, b| a.name.cmp(&b.name));

            let mut html = format!(
                "<li><h2>{}</h2>\n<ul>\n",
                checkbox(FilterGroup::State, &state.id, &state.name)
            );
            for city in cities {
                html.push_str(&format!(
                    "<li>{}</li>\n",
                    checkbox(FilterGroup::City, &city.id, &city.name)
                ));
            }
            html.push_str("</ul>\n</li>");
            html
        })
        .collect()
}

/// Sorted amenities, one list item each.
pub fn amenity_items(amenities: &[Amenity]) -> Vec<String> {
    let mut amenities: Vec<&Amenity> = amenities.iter().collect();
    amenities.sort_by(|a, b| a.name.cmp(&b.name));

    amenities
        .into_iter()
        .map(|a| format!("<li>{}</li>", checkbox(FilterGroup::Amenity, &a.id, &a.name)))
        .collect()
}

fn checkbox(group: FilterGroup, id: &str, name: &str) -> String {
    let id = html_escape(id);
    let name = html_escape(name);
    format!(
        "<input type=\"checkbox\" id=\"{group}\" data-id=\"{id}\" data-name=\"{name}\" style=\"margin-right: 10px;\">{name}"
    )
}
