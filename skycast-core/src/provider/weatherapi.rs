use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;

use crate::model::{
    AstroTimes, CurrentConditions, DayForecast, ForecastRequest, HourForecast, WeatherReport,
};

use super::{FetchError, ForecastProvider};

const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Hour timestamps come back as `"2026-08-22 11:00"`.
const HOUR_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Client for the weatherapi.com forecast endpoint.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the provider at a different endpoint; tests use this to talk to
    /// a local mock server.
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self { api_key, base_url: base_url.into(), http: Client::new() }
    }

    async fn fetch(&self, request: &ForecastRequest) -> Result<WeatherReport, FetchError> {
        let url = format!("{}/forecast.json", self.base_url);
        let days = request.days.to_string();

        debug!("requesting {days}-day forecast for '{}'", request.location);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", request.location.as_str()),
                ("days", days.as_str()),
                // air-quality and alert blocks are never read from the payload
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status { status, headers: res.headers().clone() });
        }

        let body = res.text().await?;
        let parsed: WaForecastResponse = serde_json::from_str(&body)?;

        Ok(map_response(parsed))
    }
}

#[async_trait]
impl ForecastProvider for WeatherApiProvider {
    async fn fetch_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<WeatherReport, FetchError> {
        self.fetch(request).await
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaAstro {
    sunrise: String,
    sunset: String,
}

#[derive(Debug, Deserialize)]
struct WaHour {
    time: String,
    temp_c: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaForecastDay {
    date: String,
    astro: WaAstro,
    #[serde(default)]
    hour: Vec<WaHour>,
}

#[derive(Debug, Deserialize)]
struct WaForecast {
    forecastday: Vec<WaForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WaForecastResponse {
    location: WaLocation,
    current: WaCurrent,
    forecast: WaForecast,
}

fn map_response(parsed: WaForecastResponse) -> WeatherReport {
    let location_name = format!("{}, {}", parsed.location.name, parsed.location.country);

    WeatherReport {
        location_name,
        current: CurrentConditions {
            temperature_c: parsed.current.temp_c,
            condition: parsed.current.condition.text,
        },
        days: parsed.forecast.forecastday.into_iter().filter_map(map_day).collect(),
    }
}

fn map_day(day: WaForecastDay) -> Option<DayForecast> {
    let date = match NaiveDate::parse_from_str(&day.date, DATE_FORMAT) {
        Ok(date) => date,
        Err(err) => {
            warn!("skipping forecast day with unreadable date '{}': {err}", day.date);
            return None;
        }
    };

    let hours = day
        .hour
        .into_iter()
        .filter_map(|entry| match NaiveDateTime::parse_from_str(&entry.time, HOUR_TIME_FORMAT) {
            Ok(time) => Some(HourForecast {
                time,
                temperature_c: entry.temp_c,
                condition: entry.condition.text,
            }),
            Err(err) => {
                warn!("skipping hourly entry with unreadable time '{}': {err}", entry.time);
                None
            }
        })
        .collect();

    Some(DayForecast {
        date,
        astro: AstroTimes { sunrise: day.astro.sunrise, sunset: day.astro.sunset },
        hours,
    })
}
