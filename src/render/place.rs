//! Place result blocks.

use crate::api::Place;
use crate::render::{format_number, html_escape, pluralize};

/// Render one place as an `<article>` for `section.places`.
pub fn render_place(place: &Place) -> String {
    format!(
        "<article>\n\
         <div class=\"title_box\">\n\
         <h2>{name}</h2>\n\
         <div class=\"price_by_night\">${price}</div>\n\
         </div>\n\
         <div class=\"information\">\n\
         <div class=\"max_guest\">{guests}</div>\n\
         <div class=\"number_rooms\">{rooms}</div>\n\
         <div class=\"number_bathrooms\">{bathrooms}</div>\n\
         </div>\n\
         <div class=\"description\">\n\
         {description}\n\
         </div>\n\
         </article>",
        name = html_escape(&place.name),
        price = format_number(&place.price_by_night),
        guests = pluralize(&place.max_guest, "Guest"),
        rooms = pluralize(&place.number_rooms, "Bedroom"),
        bathrooms = pluralize(&place.number_bathrooms, "Bathroom"),
        description = html_escape(&place.description),
    )
}
