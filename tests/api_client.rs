//! API client behavior against a mock HBnB API.

use hbnb_dynamic::api::{ApiClient, ApiError};
use hbnb_dynamic::config::{ApiConfig, TimeoutConfig};
use hbnb_dynamic::filters::SearchRequest;
use serde_json::json;
use uuid::Uuid;

mod common;

use common::{start_mock_api, MockResponses};

#[tokio::test]
async fn test_every_request_carries_request_id() {
    let mock = start_mock_api(MockResponses::default()).await;
    let client = ApiClient::with_base_url(&mock.url()).unwrap();

    client.status().await.unwrap();
    client.places_search(&SearchRequest::default()).await.unwrap();

    let ids = mock.request_ids();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
    for id in ids {
        assert!(Uuid::parse_str(&id).is_ok());
    }
}

#[tokio::test]
async fn test_stats_and_catalog_endpoints() {
    let mock = start_mock_api(MockResponses::default()).await;
    let client = ApiClient::with_base_url(&mock.url()).unwrap();

    let stats = client.stats().await.unwrap();
    assert_eq!(stats.places, 2);
    assert_eq!(stats.users, 1);

    let states = client.states().await.unwrap();
    assert_eq!(states.len(), 2);

    let cities = client.cities("s-1").await.unwrap();
    assert_eq!(cities.len(), 2);
    assert_eq!(cities[0].state_id, "s-1");

    let err = client.cities("missing").await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status, .. } if status.as_u16() == 404));
}

#[tokio::test]
async fn test_undecodable_body() {
    let mock = start_mock_api(MockResponses {
        places: json!({"error": "not a list"}),
        ..MockResponses::default()
    })
    .await;
    let client = ApiClient::with_base_url(&mock.url()).unwrap();

    let err = client.places_search(&SearchRequest::default()).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_status_uses_its_own_base_url() {
    let status_mock = start_mock_api(MockResponses::default()).await;
    let search_mock = start_mock_api(MockResponses::default()).await;

    let api = ApiConfig {
        base_url: format!("{}/", search_mock.url()),
        status_base_url: status_mock.url(),
    };
    let client = ApiClient::new(&api, &TimeoutConfig::default()).unwrap();

    client.status().await.unwrap();
    client.places_search(&SearchRequest::default()).await.unwrap();

    assert_eq!(status_mock.request_ids().len(), 1);
    assert!(status_mock.search_bodies().is_empty());
    assert_eq!(search_mock.search_bodies().len(), 1);
}
