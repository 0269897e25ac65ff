//! End-to-end tests: requester + adapters + HTTP clients against wiremock

use std::sync::Arc;

use application::{ApplicationError, RideEstimateRequester, RideRequestParams};
use infrastructure::{GeocodingAdapter, RideEstimateAdapter};
use integration_ride::{UberConfig, YandexGeocodingConfig};
use secrecy::SecretString;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn requester(uber: &MockServer, yandex: &MockServer) -> RideEstimateRequester {
    let rides = RideEstimateAdapter::with_config(&UberConfig {
        base_url: uber.uri(),
        timeout_secs: 5,
        ..UberConfig::default()
    })
    .unwrap();
    let geocoding = GeocodingAdapter::with_config(&YandexGeocodingConfig {
        base_url: yandex.uri(),
        timeout_secs: 5,
        ..YandexGeocodingConfig::default()
    })
    .unwrap();

    RideEstimateRequester::new(Arc::new(geocoding), Arc::new(rides))
}

fn geocode_body(pos: &str) -> String {
    format!(
        r#"{{"response": {{"GeoObjectCollection": {{"featureMember": [
            {{"GeoObject": {{"Point": {{"pos": "{pos}"}}}}}}
        ]}}}}}}"#
    )
}

async fn mount_geocode(server: &MockServer, address: &str, pos: &str) {
    Mock::given(method("GET"))
        .and(path("/1.x/"))
        .and(query_param("geocode", address))
        .respond_with(ResponseTemplate::new(200).set_body_string(geocode_body(pos)))
        .expect(1)
        .mount(server)
        .await;
}

fn params() -> RideRequestParams {
    RideRequestParams {
        uber_api_key: Some(SecretString::from("server-token")),
        ..Default::default()
    }
}

#[tokio::test]
async fn full_request_with_addresses() {
    let uber = MockServer::start().await;
    let yandex = MockServer::start().await;

    mount_geocode(&yandex, "Тверская 7", "37.6 55.7").await;
    mount_geocode(&yandex, "Шереметьево", "37.41 55.97").await;

    Mock::given(method("GET"))
        .and(path("/v1.2/estimates/time"))
        .and(query_param("start_latitude", "55.7"))
        .and(query_param("start_longitude", "37.6"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"times": [{"display_name": "uberX", "estimate": 300}]}"#,
        ))
        .expect(1)
        .mount(&uber)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1.2/estimates/price"))
        .and(query_param("end_latitude", "55.97"))
        .and(query_param("end_longitude", "37.41"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"prices": [{
                "display_name": "uberX", "distance": 3.2, "high_estimate": 15.7,
                "low_estimate": 10.3, "duration": 600, "estimate": "$10-15"
            }]}"#,
        ))
        .expect(1)
        .mount(&uber)
        .await;

    let params = RideRequestParams {
        start_address: Some("Тверская 7".to_string()),
        end_address: Some("Шереметьево".to_string()),
        ..params()
    };

    let message = requester(&uber, &yandex).execute(params).await.unwrap();

    assert_eq!(message.driving_mode.as_deref(), Some("uberX"));
    assert_eq!(message.time_to_get_driver_minutes, Some(5.0));
    let ride = message.ride.unwrap();
    assert_eq!(ride.high_estimate, Some(15));
    assert_eq!(ride.low_estimate, Some(10));
    assert!((ride.duration_minutes - 10.0).abs() < f64::EPSILON);
    assert_eq!(ride.estimate_text, "$10-15");
}

#[tokio::test]
async fn empty_geocode_result_is_a_geocoding_error() {
    let uber = MockServer::start().await;
    let yandex = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1.x/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"response": {"GeoObjectCollection": {"featureMember": []}}}"#,
        ))
        .mount(&yandex)
        .await;

    // Uber must not be called when geocoding fails
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&uber)
        .await;

    let params = RideRequestParams {
        start_address: Some("Atlantis".to_string()),
        ..params()
    };

    let err = requester(&uber, &yandex).execute(params).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Geocoding(_)));
}

#[tokio::test]
async fn unauthorized_token_is_a_ride_service_error() {
    let uber = MockServer::start().await;
    let yandex = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1.2/estimates/time"))
        .respond_with(ResponseTemplate::new(401).set_body_string(
            r#"{"message": "Invalid OAuth 2.0 credentials provided.", "code": "unauthorized"}"#,
        ))
        .mount(&uber)
        .await;

    let params = RideRequestParams {
        start_latitude: Some(55.7),
        start_longitude: Some(37.6),
        ..params()
    };

    let err = requester(&uber, &yandex).execute(params).await.unwrap_err();
    match err {
        ApplicationError::RideService(msg) => assert!(msg.contains("Invalid OAuth")),
        other => unreachable!("Expected RideService error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_key_makes_no_requests() {
    let uber = MockServer::start().await;
    let yandex = MockServer::start().await;

    for server in [&uber, &yandex] {
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(server)
            .await;
    }

    let params = RideRequestParams {
        uber_api_key: None,
        start_address: Some("Тверская 7".to_string()),
        ..Default::default()
    };

    let err = requester(&uber, &yandex).execute(params).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Configuration(_)));
}
