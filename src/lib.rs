//! HBnB places front-end controller library.

pub mod api;
pub mod config;
pub mod controller;
pub mod events;
pub mod filters;
pub mod lifecycle;
pub mod observability;
pub mod page;
pub mod render;

pub use api::ApiClient;
pub use config::HbnbConfig;
pub use controller::Controller;
pub use page::{Page, PageModel};
