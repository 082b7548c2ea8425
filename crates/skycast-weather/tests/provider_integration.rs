//! Integration tests for WeatherProvider using wiremock.
//!
//! These tests verify outcome classification against a mock provider.

use skycast_weather::{QueryOutcome, Units, WeatherError, WeatherProvider};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn kyiv_body() -> serde_json::Value {
    serde_json::json!({
        "cod": 200,
        "name": "Kyiv",
        "main": { "temp": 7.46 },
        "weather": [
            { "icon": "04d", "description": "overcast clouds" }
        ],
        "sys": { "country": "UA", "sunrise": 1_699_937_416, "sunset": 1_699_970_573 }
    })
}

fn provider_for(server: &MockServer) -> WeatherProvider {
    WeatherProvider::with_base_url("test-key", Units::Metric, &server.uri()).unwrap()
}

#[tokio::test]
async fn test_current_weather_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Kyiv"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(kyiv_body()))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let outcome = provider.current_weather("Kyiv").await.unwrap();

    let QueryOutcome::Report(report) = outcome else {
        panic!("expected a report, got {:?}", outcome);
    };
    assert_eq!(report.city_name, "Kyiv");
    assert_eq!(report.country_code, "UA");
    assert_eq!(report.temperature, 7.46);
    assert_eq!(report.icon_id, "04d");
    assert_eq!(report.description, "overcast clouds");
    assert_eq!(report.sunrise, 1_699_937_416);
    assert_eq!(report.sunset, 1_699_970_573);
}

#[tokio::test]
async fn test_city_name_with_spaces_is_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "New York"))
        .respond_with(ResponseTemplate::new(200).set_body_json(kyiv_body()))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let outcome = provider.current_weather("New York").await.unwrap();

    assert!(matches!(outcome, QueryOutcome::Report(_)));
}

#[tokio::test]
async fn test_city_not_found() {
    let mock_server = MockServer::start().await;

    // The live provider sends `cod` as a string on error bodies
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let outcome = provider.current_weather("Atlantis").await.unwrap();

    assert_eq!(
        outcome,
        QueryOutcome::CityNotFound {
            message: "city not found".to_string()
        }
    );
}

#[tokio::test]
async fn test_invalid_api_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key."
        })))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider.current_weather("Kyiv").await.unwrap_err();

    assert!(matches!(err, WeatherError::InvalidApiKey));
}

#[tokio::test]
async fn test_other_provider_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "cod": "500",
            "message": "internal error"
        })))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider.current_weather("Kyiv").await.unwrap_err();

    match err {
        WeatherError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "internal error");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_success_body_missing_fields_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cod": 200,
            "name": "Kyiv"
        })))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider.current_weather("Kyiv").await.unwrap_err();

    assert!(matches!(err, WeatherError::Parse(_)));
}

#[tokio::test]
async fn test_non_json_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider.current_weather("Kyiv").await.unwrap_err();

    match err {
        WeatherError::Parse(message) => assert!(message.contains("502")),
        other => panic!("expected Parse error, got {:?}", other),
    }
}
