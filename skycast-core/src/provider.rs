use crate::{
    Config,
    model::{ForecastRequest, WeatherReport},
    provider::weatherapi::WeatherApiProvider,
};
use async_trait::async_trait;
use reqwest::{StatusCode, header::HeaderMap};
use std::fmt::Debug;
use thiserror::Error;

pub mod weatherapi;

/// Failures while retrieving or decoding a forecast.
///
/// A non-success answer keeps the response headers so callers can show them.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach the weather service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather service answered with status {status}")]
    Status { status: StatusCode, headers: HeaderMap },

    #[error("failed to decode the weather service response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<WeatherReport, FetchError>;
}

/// Construct the provider described by `config`.
pub fn provider_from_config(config: &Config) -> Box<dyn ForecastProvider> {
    Box::new(WeatherApiProvider::new(config.api_key.clone()))
}
