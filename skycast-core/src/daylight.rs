//! Daylight duration between sunrise and sunset.
//!
//! Weather services report astro times as 12-hour wall-clock strings such as
//! `"06:41 AM"`. This module parses those strings and computes the elapsed
//! time between two of them, assuming both fall on the same calendar day.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DaylightError {
    #[error("'{input}' is not a valid clock time, expected the form HH:MM AM|PM")]
    InvalidClockTime { input: String },

    #[error("sunset {sunset} is earlier than sunrise {sunrise}")]
    SunsetBeforeSunrise { sunrise: ClockTime, sunset: ClockTime },
}

/// The AM/PM designator of a 12-hour clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        })
    }
}

/// A time of day in 12-hour notation: hour 1-12, minute 0-59, meridiem marker.
///
/// Carries no date; two `ClockTime`s are only comparable under the assumption
/// that they belong to the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
    meridiem: Meridiem,
}

impl ClockTime {
    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    /// Minutes elapsed since midnight, after 12-hour to 24-hour conversion
    /// (12 AM is hour 0, 12 PM is hour 12).
    pub fn minutes_since_midnight(&self) -> u32 {
        let hour24 = match (self.meridiem, self.hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Pm, h) if h != 12 => h + 12,
            (_, h) => h,
        };

        hour24 * 60 + self.minute
    }
}

impl FromStr for ClockTime {
    type Err = DaylightError;

    /// Accepts exactly `HH:MM AM` / `HH:MM PM`, nothing looser: two-digit
    /// hour and minute, a single space, an uppercase meridiem marker.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DaylightError::InvalidClockTime { input: s.to_string() };

        let bytes = s.as_bytes();
        if bytes.len() != 8 || bytes[2] != b':' || bytes[5] != b' ' {
            return Err(malformed());
        }

        let hour = two_digits(&bytes[0..2]).ok_or_else(malformed)?;
        let minute = two_digits(&bytes[3..5]).ok_or_else(malformed)?;
        let meridiem = match &bytes[6..8] {
            b"AM" => Meridiem::Am,
            b"PM" => Meridiem::Pm,
            _ => return Err(malformed()),
        };

        if !(1..=12).contains(&hour) || minute > 59 {
            return Err(malformed());
        }

        Ok(ClockTime { hour, minute, meridiem })
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02} {}", self.hour, self.minute, self.meridiem)
    }
}

fn two_digits(bytes: &[u8]) -> Option<u32> {
    match bytes {
        &[tens @ b'0'..=b'9', units @ b'0'..=b'9'] => {
            Some(u32::from(tens - b'0') * 10 + u32::from(units - b'0'))
        }
        _ => None,
    }
}

/// Elapsed daylight split into whole hours and remainder minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaylightDuration {
    pub hours: u32,
    pub minutes: u32,
}

impl fmt::Display for DaylightDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hours and {} minutes", self.hours, self.minutes)
    }
}

/// Compute the time between `sunrise` and `sunset`, both given as
/// `HH:MM AM|PM` strings on the same day.
///
/// A sunset that falls before the sunrise is rejected rather than reported
/// as a negative duration, so callers can tell broken astro data apart from
/// a formatting problem.
pub fn daylight_duration(sunrise: &str, sunset: &str) -> Result<DaylightDuration, DaylightError> {
    let rise: ClockTime = sunrise.parse()?;
    let set: ClockTime = sunset.parse()?;

    let rise_minutes = rise.minutes_since_midnight();
    let set_minutes = set.minutes_since_midnight();

    if set_minutes < rise_minutes {
        return Err(DaylightError::SunsetBeforeSunrise { sunrise: rise, sunset: set });
    }

    let elapsed = set_minutes - rise_minutes;
    Ok(DaylightDuration { hours: elapsed / 60, minutes: elapsed % 60 })
}
