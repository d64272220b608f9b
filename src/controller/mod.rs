//! Filter-and-Render Controller.
//!
//! # Data Flow
//! ```text
//! startup:
//!     status check ─┐
//!     places search ├─ issued concurrently → results applied to the page
//!     filter catalog┘
//!
//! UI events:
//!     checkbox change → FilterState → heading text
//!     search click    → places search with current selections → articles
//!     status          → status check → api_status class
//! ```
//!
//! The controller is the only writer of its page. Network failures are
//! returned and logged; the page keeps whatever it showed before.

pub mod catalog;

use tokio::sync::broadcast;

use crate::api::{ApiClient, ApiError, ApiResult, Place, StatusResponse};
use crate::config::PageConfig;
use crate::events::UiEvent;
use crate::filters::{CheckboxChange, FilterState};
use crate::page::{Element, Page, AVAILABLE_CLASS};
use crate::render;

pub use catalog::{fetch_catalog, Catalog};

/// What the status endpoint reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Unavailable,
}

/// Outcome of each startup request.
#[derive(Debug)]
pub struct StartupReport {
    pub status: ApiResult<Availability>,
    /// Number of place blocks appended.
    pub places: ApiResult<usize>,
    /// Number of filter list items rendered, when the catalog is enabled.
    pub catalog: Option<ApiResult<usize>>,
}

impl StartupReport {
    /// `None` when the catalog was not requested.
    pub fn catalog_ok(&self) -> Option<bool> {
        self.catalog.as_ref().map(Result::is_ok)
    }
}

/// What the driver should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Continue,
    Render,
    Quit,
}

pub struct Controller<P: Page> {
    api: ApiClient,
    filters: FilterState,
    page: P,
    load_catalog: bool,
    replace_results: bool,
}

impl<P: Page> Controller<P> {
    pub fn new(api: ApiClient, page: P, config: &PageConfig) -> Self {
        Self {
            api,
            filters: FilterState::new(),
            page,
            load_catalog: config.load_catalog,
            replace_results: config.replace_results,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn into_page(self) -> P {
        self.page
    }

    /// Run the startup requests concurrently and apply their results.
    pub async fn start(&mut self) -> StartupReport {
        let request = self.filters.search_request();
        let api = &self.api;
        let load_catalog = self.load_catalog;

        let catalog = async move {
            if load_catalog {
                Some(fetch_catalog(api).await)
            } else {
                None
            }
        };

        let (status, places, catalog) =
            tokio::join!(api.status(), api.places_search(&request), catalog);

        StartupReport {
            status: self.apply_status(status),
            places: self.apply_places(places),
            catalog: catalog.map(|c| self.apply_catalog(c)),
        }
    }

    /// Dispatch one UI event.
    pub async fn handle(&mut self, event: UiEvent) -> EventOutcome {
        match event {
            UiEvent::Toggle(change) => {
                self.on_checkbox_change(&change);
                EventOutcome::Continue
            }
            UiEvent::Search => {
                // Errors are already logged by `apply_places`.
                let _ = self.search().await;
                EventOutcome::Continue
            }
            UiEvent::Status => {
                let _ = self.check_status().await;
                EventOutcome::Continue
            }
            UiEvent::Render => EventOutcome::Render,
            UiEvent::Quit => EventOutcome::Quit,
        }
    }

    /// Dispatch one UI event, abandoning it if shutdown fires first.
    ///
    /// An in-flight request is dropped on shutdown and reported as `Quit`.
    pub async fn handle_until_shutdown(
        &mut self,
        event: UiEvent,
        shutdown: &mut broadcast::Receiver<()>,
    ) -> EventOutcome {
        tokio::select! {
            outcome = self.handle(event) => outcome,
            _ = shutdown.recv() => {
                tracing::info!("Shutdown while handling event, abandoning it");
                EventOutcome::Quit
            }
        }
    }

    /// Update the filter selections and the affected heading.
    ///
    /// Returns `false` when the change came from an unknown filter group.
    pub fn on_checkbox_change(&mut self, change: &CheckboxChange) -> bool {
        match self.filters.apply(change) {
            Some(update) => {
                self.page.set_text(update.target, &update.text);
                true
            }
            None => false,
        }
    }

    /// Query the status endpoint and update `div#api_status`.
    pub async fn check_status(&mut self) -> ApiResult<Availability> {
        let result = self.api.status().await;
        self.apply_status(result)
    }

    /// Search with the current selections and append the results.
    ///
    /// The body carries the checked state, city and amenity ids; with nothing
    /// checked it is `{}`.
    pub async fn search(&mut self) -> ApiResult<usize> {
        let request = self.filters.search_request();
        let result = self.api.places_search(&request).await;
        self.apply_places(result)
    }

    /// Fetch the filter catalog and render the checkbox lists.
    pub async fn load_catalog(&mut self) -> ApiResult<usize> {
        let result = fetch_catalog(&self.api).await;
        self.apply_catalog(result)
    }

    fn apply_status(&mut self, result: ApiResult<StatusResponse>) -> ApiResult<Availability> {
        match result {
            Ok(response) if response.is_ok() => {
                self.page.add_class(Element::ApiStatus, AVAILABLE_CLASS);
                tracing::info!("API status OK");
                Ok(Availability::Available)
            }
            Ok(response) => {
                self.page.remove_class(Element::ApiStatus, AVAILABLE_CLASS);
                tracing::info!(status = %response.status, "API status not OK");
                Ok(Availability::Unavailable)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Status check failed");
                Err(e)
            }
        }
    }

    fn apply_places(&mut self, result: ApiResult<Vec<Place>>) -> ApiResult<usize> {
        let places = result.map_err(|e| log_failure("Places search failed", e))?;

        if self.replace_results {
            self.page.clear(Element::Places);
        }
        for place in &places {
            self.page.append_html(Element::Places, render::render_place(place));
        }

        tracing::info!(count = places.len(), "Rendered places");
        Ok(places.len())
    }

    fn apply_catalog(&mut self, result: ApiResult<Catalog>) -> ApiResult<usize> {
        let catalog = result.map_err(|e| log_failure("Filter catalog failed", e))?;

        let locations = render::location_items(&catalog.locations);
        let amenities = render::amenity_items(&catalog.amenities);
        let count = locations.len() + amenities.len();

        self.page.clear(Element::LocationFilters);
        self.page.clear(Element::AmenityFilters);
        for item in locations {
            self.page.append_html(Element::LocationFilters, item);
        }
        for item in amenities {
            self.page.append_html(Element::AmenityFilters, item);
        }

        tracing::info!(
            states = catalog.locations.len(),
            amenities = catalog.amenities.len(),
            "Rendered filter catalog"
        );
        Ok(count)
    }
}

fn log_failure(what: &'static str, e: ApiError) -> ApiError {
    tracing::warn!(error = %e, "{}", what);
    e
}
