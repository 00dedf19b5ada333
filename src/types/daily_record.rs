//! Defines the value objects returned by a merged forecast: the per-day record
//! and its calendar label.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The calendar label of one forecast day, exactly as the portal renders it.
///
/// The month is the portal's own token (e.g. `"Junio"`) and is passed through
/// without localization or calendar arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastDate {
    /// Day of month.
    pub day: u32,
    /// Month name token as rendered by the portal.
    pub month: String,
}

impl ForecastDate {
    pub fn new(day: u32, month: impl Into<String>) -> Self {
        Self {
            day,
            month: month.into(),
        }
    }
}

impl fmt::Display for ForecastDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.month)
    }
}

/// One merged day of forecast data, combining the daily overview and the
/// detailed breakdown of the same station page.
///
/// Records are immutable value objects constructed once by the merge and
/// returned to the caller in document order. The derive on `Serialize` keeps
/// the JSON field names aligned with the portal's vocabulary
/// (`max_temperature`, `precipitation`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Date label shared by both source views.
    pub date: ForecastDate,
    /// Maximum temperature in degrees Celsius.
    pub max_temperature: i32,
    /// Minimum temperature in degrees Celsius.
    pub min_temperature: i32,
    /// Precipitation sheet in millimetres.
    pub precipitation: f64,
    /// Wind speed in km/h.
    pub wind_speed: i32,
    /// Sunrise time token, `"hh:mm"`-like, kept as a string.
    pub sunrise: String,
    /// Sunset time token, `"hh:mm"`-like, kept as a string.
    pub sunset: String,
    /// Probability of precipitation as a fraction of one (0.73 for "73%").
    pub precipitation_probability: f64,
    /// Cloud cover as a fraction of one.
    pub cloud_percentage: f64,
    /// Ultraviolet radiation label as rendered, e.g. "Alta" or "Muy alta".
    pub ultraviolet_radiation: String,
}
