//! Filter State Tracker.
//!
//! # Data Flow
//! ```text
//! checkbox change (group id, data-name, data-id, checked)
//!     → group.rs (resolve state / city / amenity)
//!     → state.rs (insert or remove name → id)
//!     → HeadingUpdate (sorted, comma-joined summary)
//!     → controller writes it into the page
//! ```
//!
//! Selections also feed the places search request body.

pub mod group;
pub mod state;

pub use group::FilterGroup;
pub use state::{CheckboxChange, FilterState, HeadingUpdate, SearchRequest};
