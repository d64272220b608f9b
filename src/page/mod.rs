//! Document access.
//!
//! # Data Flow
//! ```text
//! controller
//!     → Page trait (element handles, no selector lookups)
//!     → model.rs (in-memory element state)
//!     → document.rs (full HTML page with cache-busted assets)
//! ```

pub mod document;
pub mod model;

pub use model::PageModel;

/// The page elements the controller reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    /// `.amenities h4`
    AmenitiesHeading,
    /// `.locations h4`
    LocationsHeading,
    /// `div#api_status`
    ApiStatus,
    /// `section.places`
    Places,
    /// `.locations ul.popover`
    LocationFilters,
    /// `.amenities ul.popover`
    AmenityFilters,
}

impl Element {
    /// CSS selector of the element in the rendered page.
    pub fn selector(self) -> &'static str {
        match self {
            Element::AmenitiesHeading => ".amenities h4",
            Element::LocationsHeading => ".locations h4",
            Element::ApiStatus => "div#api_status",
            Element::Places => "section.places",
            Element::LocationFilters => ".locations ul.popover",
            Element::AmenityFilters => ".amenities ul.popover",
        }
    }
}

/// Class set on `div#api_status` while the API reports OK.
pub const AVAILABLE_CLASS: &str = "available";

/// Element accessor used by the controller.
pub trait Page {
    /// Replace the element's text content.
    fn set_text(&mut self, element: Element, text: &str);

    fn add_class(&mut self, element: Element, class: &str);

    fn remove_class(&mut self, element: Element, class: &str);

    fn has_class(&self, element: Element, class: &str) -> bool;

    /// Append an HTML fragment as the element's last child.
    fn append_html(&mut self, element: Element, html: String);

    /// Remove all children of the element.
    fn clear(&mut self, element: Element);
}
