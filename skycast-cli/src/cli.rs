use anyhow::Context;
use chrono::Local;
use clap::Parser;

use skycast_core::config::{Config, MAX_FORECAST_DAYS};
use skycast_core::model::ForecastRequest;
use skycast_core::provider::{self, FetchError};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "skycast",
    version,
    about = "Current weather, forecast and daylight for a configured location"
)]
pub struct Cli {
    /// Forecast days to request; the free weatherapi.com tier allows up to 3.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=i64::from(MAX_FORECAST_DAYS)))]
    pub days: Option<u8>,

    /// Hour of day (0-23) reported for the upcoming days.
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=23))]
    pub hour: Option<u32>,
}

impl Cli {
    /// Fetch and print the report; `config` comes from the entry point.
    pub async fn run(self, config: Config) -> anyhow::Result<()> {
        let config = self.apply_overrides(config);

        let provider = provider::provider_from_config(&config);
        let request =
            ForecastRequest { location: config.location.clone(), days: config.forecast_days };

        let report = match provider.fetch_forecast(&request).await {
            Ok(report) => report,
            Err(FetchError::Status { status, headers }) => {
                eprintln!("Expected a success status but got: {status}");
                eprintln!("Response headers:");
                for (name, value) in &headers {
                    eprintln!("{name}: {}", String::from_utf8_lossy(value.as_bytes()));
                }
                anyhow::bail!("weather service answered with status {status}");
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("failed to retrieve the forecast for '{}'", request.location)
                });
            }
        };

        let today = Local::now().date_naive();
        print!("{}", render::render_report(&report, config.forecast_hour, today));

        Ok(())
    }

    /// Flag values win over the environment and the settings file.
    fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(days) = self.days {
            config.forecast_days = days;
        }
        if let Some(hour) = self.hour {
            config.forecast_hour = hour;
        }
        config
    }
}
