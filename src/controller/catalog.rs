//! Filter catalog lookup.

use futures_util::future::try_join_all;

use crate::api::{Amenity, ApiClient, ApiResult, City, State};

/// Everything needed to build the filter checkbox lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Each state with its cities.
    pub locations: Vec<(State, Vec<City>)>,
    pub amenities: Vec<Amenity>,
}

/// Fetch states, their cities and amenities.
///
/// City lookups for all states run concurrently. Any failure fails the
/// whole catalog.
pub async fn fetch_catalog(api: &ApiClient) -> ApiResult<Catalog> {
    let (states, amenities) = tokio::try_join!(api.states(), api.amenities())?;

    let cities = try_join_all(states.iter().map(|state| api.cities(&state.id))).await?;

    tracing::debug!(states = states.len(), amenities = amenities.len(), "Fetched filter catalog");

    Ok(Catalog {
        locations: states.into_iter().zip(cities).collect(),
        amenities,
    })
}
