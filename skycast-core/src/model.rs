use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// What to ask the weather service for.
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    pub location: String,
    pub days: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub condition: String,
}

/// Sunrise and sunset exactly as reported by the service, e.g. `"06:41 AM"`.
///
/// Kept as strings so the daylight calculator sees the raw service values
/// and broken astro data surfaces there instead of during mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AstroTimes {
    pub sunrise: String,
    pub sunset: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourForecast {
    pub time: NaiveDateTime,
    pub temperature_c: f64,
    pub condition: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayForecast {
    pub date: NaiveDate,
    pub astro: AstroTimes,
    pub hours: Vec<HourForecast>,
}

impl DayForecast {
    /// The hourly entry that lands on `hour` o'clock, if the service sent one.
    pub fn hour_at(&self, hour: u32) -> Option<&HourForecast> {
        self.hours.iter().find(|entry| entry.time.hour() == hour)
    }
}

/// Everything the CLI renders for one invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location_name: String,
    pub current: CurrentConditions,
    pub days: Vec<DayForecast>,
}

impl WeatherReport {
    /// The first forecast day; the service reports it as today.
    pub fn today(&self) -> Option<&DayForecast> {
        self.days.first()
    }

    /// Entries at `hour` o'clock for every forecast day strictly after `today`.
    pub fn upcoming_at(&self, hour: u32, today: NaiveDate) -> Vec<(&DayForecast, &HourForecast)> {
        self.days
            .iter()
            .filter(|day| day.date > today)
            .filter_map(|day| day.hour_at(hour).map(|entry| (day, entry)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn day(date_str: &str, hour_times: &[&str]) -> DayForecast {
        DayForecast {
            date: date(date_str),
            astro: AstroTimes { sunrise: "06:00 AM".into(), sunset: "06:00 PM".into() },
            hours: hour_times
                .iter()
                .map(|t| HourForecast {
                    time: NaiveDateTime::parse_from_str(t, "%Y-%m-%d %H:%M").unwrap(),
                    temperature_c: 14.5,
                    condition: "Sunny".into(),
                })
                .collect(),
        }
    }

    fn report(days: Vec<DayForecast>) -> WeatherReport {
        WeatherReport {
            location_name: "London, United Kingdom".into(),
            current: CurrentConditions { temperature_c: 11.0, condition: "Partly cloudy".into() },
            days,
        }
    }

    #[test]
    fn hour_at_picks_the_matching_entry() {
        let day = day("2026-08-22", &["2026-08-22 10:00", "2026-08-22 11:00"]);

        let entry = day.hour_at(11).expect("11:00 entry exists");
        assert_eq!(entry.time.hour(), 11);
        assert!(day.hour_at(17).is_none());
    }

    #[test]
    fn upcoming_at_skips_today() {
        let report = report(vec![
            day("2026-08-22", &["2026-08-22 11:00"]),
            day("2026-08-23", &["2026-08-23 11:00"]),
            day("2026-08-24", &["2026-08-24 11:00"]),
        ]);

        let upcoming = report.upcoming_at(11, date("2026-08-22"));
        let dates: Vec<NaiveDate> = upcoming.iter().map(|(day, _)| day.date).collect();
        assert_eq!(dates, vec![date("2026-08-23"), date("2026-08-24")]);
    }

    #[test]
    fn upcoming_at_drops_days_without_the_requested_hour() {
        let report = report(vec![
            day("2026-08-23", &["2026-08-23 09:00"]),
            day("2026-08-24", &["2026-08-24 11:00"]),
        ]);

        let upcoming = report.upcoming_at(11, date("2026-08-22"));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].0.date, date("2026-08-24"));
    }

    #[test]
    fn today_is_the_first_forecast_day() {
        let report = report(vec![day("2026-08-22", &[]), day("2026-08-23", &[])]);
        assert_eq!(report.today().map(|d| d.date), Some(date("2026-08-22")));

        let empty = WeatherReport {
            location_name: "Nowhere".into(),
            current: CurrentConditions { temperature_c: 0.0, condition: "Clear".into() },
            days: vec![],
        };
        assert!(empty.today().is_none());
    }
}
