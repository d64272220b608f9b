//! Full HTML page serialization.
//!
//! The layout mirrors the HBnB front page: a header holding the API status
//! badge, a filters bar with the locations and amenities popovers plus the
//! search button, and the places section. Stylesheet URLs carry a per-render
//! cache id.

use std::fmt::Write;

use uuid::Uuid;

use crate::page::{Element, PageModel};
use crate::render::html_escape;

const STYLESHEETS: &[&str] = &[
    "4-common.css",
    "3-header.css",
    "3-footer.css",
    "6-filters.css",
    "8-places.css",
];

/// Render the page as a complete HTML document.
pub fn to_html(page: &PageModel, title: &str, cache_id: Uuid) -> String {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", html_escape(title));
    for sheet in STYLESHEETS {
        let _ = writeln!(
            out,
            "<link rel=\"stylesheet\" type=\"text/css\" href=\"../static/styles/{sheet}?{cache_id}\">"
        );
    }
    out.push_str("</head>\n<body>\n");

    out.push_str("<header>\n<div class=\"logo\"></div>\n");
    let classes = page.class_attr(Element::ApiStatus);
    if classes.is_empty() {
        out.push_str("<div id=\"api_status\"></div>\n");
    } else {
        let _ = writeln!(out, "<div id=\"api_status\" class=\"{}\"></div>", html_escape(&classes));
    }
    out.push_str("</header>\n<div class=\"container\">\n");

    out.push_str("<section class=\"filters\">\n");
    push_filter_box(&mut out, "locations", "States", page, Element::LocationsHeading, Element::LocationFilters);
    push_filter_box(&mut out, "amenities", "Amenities", page, Element::AmenitiesHeading, Element::AmenityFilters);
    out.push_str("<button type=\"button\">Search</button>\n</section>\n");

    out.push_str("<section class=\"places\">\n<h1>Places</h1>\n");
    for article in page.children(Element::Places) {
        out.push_str(article);
        out.push('\n');
    }
    out.push_str("</section>\n</div>\n");

    out.push_str("<footer>\n<p>Holberton School</p>\n</footer>\n</body>\n</html>\n");
    out
}

fn push_filter_box(
    out: &mut String,
    class: &str,
    label: &str,
    page: &PageModel,
    heading: Element,
    list: Element,
) {
    let _ = writeln!(out, "<div class=\"{class}\">");
    let _ = writeln!(out, "<h3>{label}</h3>");
    let text = page.text(heading);
    if text.is_empty() {
        out.push_str("<h4>&nbsp;</h4>\n");
    } else {
        let _ = writeln!(out, "<h4>{}</h4>", html_escape(text));
    }
    out.push_str("<ul class=\"popover\">\n");
    for item in page.children(list) {
        out.push_str(item);
        out.push('\n');
    }
    out.push_str("</ul>\n</div>\n");
}
