use httpmock::prelude::*;
use skycast_core::model::ForecastRequest;
use skycast_core::provider::weatherapi::WeatherApiProvider;
use skycast_core::provider::{FetchError, ForecastProvider};

fn forecast_body() -> serde_json::Value {
    serde_json::json!({
        "location": { "name": "London", "country": "United Kingdom" },
        "current": { "temp_c": 11.0, "condition": { "text": "Partly cloudy" } },
        "forecast": {
            "forecastday": [
                {
                    "date": "2026-08-22",
                    "astro": { "sunrise": "06:00 AM", "sunset": "08:11 PM" },
                    "hour": [
                        { "time": "2026-08-22 11:00", "temp_c": 16.8, "condition": { "text": "Sunny" } }
                    ]
                },
                {
                    "date": "2026-08-23",
                    "astro": { "sunrise": "06:02 AM", "sunset": "08:09 PM" },
                    "hour": [
                        { "time": "2026-08-23 11:00", "temp_c": 17.4, "condition": { "text": "Overcast" } }
                    ]
                }
            ]
        }
    })
}

fn request() -> ForecastRequest {
    ForecastRequest { location: "London".into(), days: 3 }
}

#[tokio::test]
async fn fetches_and_maps_a_forecast() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/forecast.json")
            .query_param("key", "TESTKEY")
            .query_param("q", "London")
            .query_param("days", "3")
            .query_param("aqi", "no")
            .query_param("alerts", "no");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(forecast_body());
    });

    let provider = WeatherApiProvider::with_base_url("TESTKEY".into(), server.base_url());
    let report = provider.fetch_forecast(&request()).await.expect("fetch should succeed");

    mock.assert();
    assert_eq!(report.location_name, "London, United Kingdom");
    assert_eq!(report.current.condition, "Partly cloudy");
    assert_eq!(report.days.len(), 2);
    assert_eq!(report.days[0].astro.sunrise, "06:00 AM");
    assert_eq!(report.days[1].hours.len(), 1);
}

#[tokio::test]
async fn non_success_status_carries_headers() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/forecast.json");
        then.status(403)
            .header("x-weatherapi-docs", "https://www.weatherapi.com/docs/")
            .body(r#"{"error":{"code":2008,"message":"API key has been disabled."}}"#);
    });

    let provider = WeatherApiProvider::with_base_url("BADKEY".into(), server.base_url());
    let err = provider.fetch_forecast(&request()).await.unwrap_err();

    match err {
        FetchError::Status { status, headers } => {
            assert_eq!(status.as_u16(), 403);
            assert_eq!(
                headers.get("x-weatherapi-docs").and_then(|v| v.to_str().ok()),
                Some("https://www.weatherapi.com/docs/")
            );
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/forecast.json");
        then.status(200).body("not json at all");
    });

    let provider = WeatherApiProvider::with_base_url("TESTKEY".into(), server.base_url());
    let err = provider.fetch_forecast(&request()).await.unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // nothing listens on the discard port
    let provider = WeatherApiProvider::with_base_url("TESTKEY".into(), "http://127.0.0.1:9");
    let err = provider.fetch_forecast(&request()).await.unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)), "got {err:?}");
}
