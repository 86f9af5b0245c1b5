//! Human-friendly text for a weather report.

use std::fmt::Write;

use chrono::NaiveDate;
use skycast_core::daylight;
use skycast_core::model::WeatherReport;

/// Render the whole report: current conditions, upcoming days at
/// `forecast_hour`, then sunrise/sunset and the daylight duration.
///
/// `today` decides which forecast days count as upcoming; the binary passes
/// the current local date.
pub fn render_report(report: &WeatherReport, forecast_hour: u32, today: NaiveDate) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Weather in {} now is {} degrees Celsius and {}",
        report.location_name, report.current.temperature_c, report.current.condition
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "Forecast for the next days at {}:", format_hour_12(forecast_hour));
    for (day, entry) in report.upcoming_at(forecast_hour, today) {
        let _ = writeln!(
            out,
            "- {}: {} degrees Celsius, {}",
            day.date, entry.temperature_c, entry.condition
        );
    }

    if let Some(first_day) = report.today() {
        let astro = &first_day.astro;

        let _ = writeln!(out);
        let _ = writeln!(out, "Sunrise and sunset today:");
        let _ = writeln!(out, "- The sun rose at {} and sets at {}", astro.sunrise, astro.sunset);

        // Broken astro data only costs the duration line, never the report.
        match daylight::daylight_duration(&astro.sunrise, &astro.sunset) {
            Ok(duration) => {
                let _ = writeln!(out, "- Time between sunrise and sunset is {duration}");
            }
            Err(err) => {
                let _ = writeln!(out, "- Could not compute the daylight duration: {err}");
            }
        }
    }

    out
}

/// `11` -> `11 AM`, `15` -> `3 PM`; the service speaks 12-hour notation.
fn format_hour_12(hour: u32) -> String {
    match hour {
        0 => "12 AM".to_string(),
        1..=11 => format!("{hour} AM"),
        12 => "12 PM".to_string(),
        _ => format!("{} PM", hour - 12),
    }
}
